//! Error types for parsing and processing ZRXP input

use crate::zrxp::ast::Position;
use std::path::PathBuf;

/// Errors surfaced by the zrxp library
///
/// Parsing never recovers: the first failure aborts and no partial document is
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum ZrxpError {
    /// The input does not match the ZRXP grammar
    #[error("syntax error at {position}: {}", describe_syntax(.found, .expected))]
    Syntax {
        position: Position,
        found: Option<String>,
        expected: Vec<String>,
    },

    /// An unknown strategy, output format or unreadable configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The source file could not be read
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document could not be rendered in the requested output format
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl ZrxpError {
    /// Position of a syntax error, if this is one
    pub fn position(&self) -> Option<Position> {
        match self {
            ZrxpError::Syntax { position, .. } => Some(*position),
            _ => None,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, ZrxpError::Syntax { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ZrxpError::Configuration(_))
    }
}

fn describe_syntax(found: &Option<String>, expected: &[String]) -> String {
    let found = match found {
        Some(text) => format!("unexpected {:?}", text),
        None => "unexpected end of input".to_string(),
    };
    if expected.is_empty() {
        found
    } else {
        format!("{}, expected {}", found, expected.join(" or "))
    }
}

impl From<config::ConfigError> for ZrxpError {
    fn from(err: config::ConfigError) -> Self {
        ZrxpError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for ZrxpError {
    fn from(err: serde_json::Error) -> Self {
        ZrxpError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for ZrxpError {
    fn from(err: serde_yaml::Error) -> Self {
        ZrxpError::Serialization(err.to_string())
    }
}
