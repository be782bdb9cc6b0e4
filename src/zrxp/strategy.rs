//! Parse strategies
//!
//! The grammar is shared; only the record production differs. The eager
//! strategy splits every record line into fields while parsing. The bulk
//! strategy captures the record lines of a block verbatim so a tabular reader
//! can split them later.

use crate::zrxp::error::ZrxpError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects how record lines are reduced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseStrategy {
    /// Tokenize every record line into fields at parse time
    #[default]
    Eager,
    /// Keep the record lines as raw text for a tabular reader
    Bulk,
}

impl ParseStrategy {
    pub const ALL: [ParseStrategy; 2] = [ParseStrategy::Eager, ParseStrategy::Bulk];

    /// Name used in configuration files and on the command line
    pub fn name(self) -> &'static str {
        match self {
            ParseStrategy::Eager => "eager",
            ParseStrategy::Bulk => "bulk",
        }
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParseStrategy {
    type Err = ZrxpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParseStrategy::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.name() == s)
            .ok_or_else(|| {
                ZrxpError::Configuration(format!(
                    "unknown parse strategy '{}' (expected one of: eager, bulk)",
                    s
                ))
            })
    }
}
