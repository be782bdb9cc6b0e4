//! Access to the sample files under `tests/fixtures/`

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::zrxp::api::parse_file;
use crate::zrxp::ast::Document;
use crate::zrxp::error::ZrxpError;
use crate::zrxp::strategy::ParseStrategy;

/// Sample files available to tests
pub const AVAILABLE_SAMPLES: &[&str] = &[
    "single.zrx",
    "multi.zrx",
    "comma.zrx",
    "malformed.zrx",
    "empty.zrx",
];

pub struct ZrxpSamples;

impl ZrxpSamples {
    fn samples_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    /// Full path to a sample, failing for names not in [`AVAILABLE_SAMPLES`]
    pub fn path(name: &str) -> Result<PathBuf, ZrxpError> {
        let path = Self::samples_dir().join(name);
        if !AVAILABLE_SAMPLES.contains(&name) {
            return Err(ZrxpError::Io {
                path,
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("sample is not one of {:?}", AVAILABLE_SAMPLES),
                ),
            });
        }
        Ok(path)
    }

    pub fn get_string(name: &str) -> Result<String, ZrxpError> {
        let path = Self::path(name)?;
        fs::read_to_string(&path).map_err(|source| ZrxpError::Io { path, source })
    }

    pub fn parse(name: &str, strategy: ParseStrategy) -> Result<Document, ZrxpError> {
        parse_file(Self::path(name)?, strategy)
    }
}
