//! Output formats for parsed documents
//!
//! - `json` and `yaml` serialize the document model through serde
//! - `tag` is an XML-like rendering that mirrors the model's nesting
//! - `treeviz` is a compact tree for reading in a terminal

pub mod tag;
pub mod treeviz;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::zrxp::ast::Document;
use crate::zrxp::error::ZrxpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Tag,
    Treeviz,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Tag,
        OutputFormat::Treeviz,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = ZrxpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| {
                ZrxpError::Configuration(format!(
                    "unknown output format '{}' (expected one of: json, yaml, tag, treeviz)",
                    s
                ))
            })
    }
}

/// Render a document in the given format
pub fn serialize(doc: &Document, format: OutputFormat) -> Result<String, ZrxpError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(doc)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(doc)?),
        OutputFormat::Tag => Ok(tag::serialize_document(doc)),
        OutputFormat::Treeviz => Ok(treeviz::to_treeviz_str(doc)),
    }
}
