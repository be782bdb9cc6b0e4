//! Public parsing API
//!
//! Every entry point is a pure function of its input: no state survives a call,
//! so independent files can be parsed concurrently by the caller.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::zrxp::ast::Document;
use crate::zrxp::building::build_document;
use crate::zrxp::error::ZrxpError;
use crate::zrxp::parser::parse_tree;
use crate::zrxp::strategy::ParseStrategy;

/// Parse ZRXP text, splitting every record line into fields
pub fn parse(source: &str) -> Result<Document, ZrxpError> {
    parse_with(source, ParseStrategy::Eager)
}

/// Parse ZRXP text, keeping each block's record lines as raw text
pub fn parse_bulk(source: &str) -> Result<Document, ZrxpError> {
    parse_with(source, ParseStrategy::Bulk)
}

/// Parse ZRXP text with an explicit strategy
pub fn parse_with(source: &str, strategy: ParseStrategy) -> Result<Document, ZrxpError> {
    debug!(bytes = source.len(), %strategy, "parsing zrxp source");
    let tree = parse_tree(source, strategy)?;
    Ok(build_document(source, tree))
}

/// Parse ZRXP text with a strategy given by name (`"eager"` or `"bulk"`)
pub fn parse_named(source: &str, strategy: &str) -> Result<Document, ZrxpError> {
    let strategy: ParseStrategy = strategy.parse()?;
    parse_with(source, strategy)
}

/// Read a file whole and parse it
pub fn parse_file<P: AsRef<Path>>(path: P, strategy: ParseStrategy) -> Result<Document, ZrxpError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ZrxpError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "read zrxp file");
    parse_with(&source, strategy)
}

/// Read a file whole and parse it with a strategy given by name
pub fn parse_file_named<P: AsRef<Path>>(path: P, strategy: &str) -> Result<Document, ZrxpError> {
    let strategy: ParseStrategy = strategy.parse()?;
    parse_file(path, strategy)
}
