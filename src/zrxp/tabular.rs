//! Tabular reader for bulk record text
//!
//! The bulk strategy hands back each block's record lines verbatim. This reader
//! turns that text into header-less rows, splitting columns on whitespace or on
//! commas. Values stay strings; interpreting them is left to the caller.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::zrxp::ast::{Document, Record, RecordSet, TimeSeriesBlock};
use crate::zrxp::error::ZrxpError;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").unwrap());

/// Column separator used by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Runs of spaces and tabs
    #[default]
    Whitespace,
    /// A comma, with surrounding whitespace ignored
    Comma,
}

impl Delimiter {
    pub fn name(self) -> &'static str {
        match self {
            Delimiter::Whitespace => "whitespace",
            Delimiter::Comma => "comma",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Delimiter {
    type Err = ZrxpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "whitespace" => Ok(Delimiter::Whitespace),
            "comma" => Ok(Delimiter::Comma),
            _ => Err(ZrxpError::Configuration(format!(
                "unknown delimiter '{}' (expected one of: whitespace, comma)",
                s
            ))),
        }
    }
}

/// Header-less delimited text reader
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabularReader {
    delimiter: Delimiter,
}

impl TabularReader {
    /// A reader splitting on whitespace
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(delimiter: Delimiter) -> Self {
        Self { delimiter }
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    /// Read every non-blank line into a row
    pub fn read(&self, text: &str) -> Vec<Record> {
        LINE_BREAK
            .split(text)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.split_line(line))
            .collect()
    }

    /// Read text into a table with numbered columns
    pub fn read_table(&self, text: &str) -> Table {
        Table {
            rows: self.read(text),
        }
    }

    fn split_line(&self, line: &str) -> Record {
        let pattern = match self.delimiter {
            Delimiter::Whitespace => &*WHITESPACE,
            Delimiter::Comma => &*COMMA,
        };
        pattern.split(line).map(str::to_string).collect()
    }

    /// Replace raw record sets in a document with rows read by this reader
    pub fn materialize(&self, document: &Document) -> Document {
        let blocks = document
            .blocks
            .iter()
            .map(|block| {
                let records = match &block.records {
                    RecordSet::Raw(text) => RecordSet::Records(self.read(text)),
                    records => records.clone(),
                };
                TimeSeriesBlock {
                    records,
                    ..block.clone()
                }
            })
            .collect();
        Document::new(blocks)
    }
}

/// Rows read from record text. Rows may differ in width.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<Record>,
}

impl Table {
    /// Width of the widest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Values of one column; `None` where a row is too short
    pub fn column(&self, index: usize) -> Vec<Option<&str>> {
        self.rows
            .iter()
            .map(|row| row.get(index).map(String::as_str))
            .collect()
    }
}
