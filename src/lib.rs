//! # zrxp
//!
//! A parser for ZRXP, the line-oriented exchange format for hydrological and
//! meteorological time series.
//!
//! A ZRXP file is a sequence of blocks. Each block opens with `#` header lines
//! carrying `|*|`-separated metadata fields and continues with whitespace
//! separated data records:
//!
//! ```text
//! #SANR2102|*|SNAMEGreim|*|
//! #CUNITm3/s|*|RINVAL-777|*|
//! 20210101000000 1.23
//! 20210101010000 1.45
//! ```
//!
//! Parsing is a pure function of the text and a [`ParseStrategy`]: the eager
//! strategy splits every record into fields, the bulk strategy hands back the
//! verbatim record text for a [`TabularReader`](zrxp::tabular::TabularReader).
//!
//! ## Testing
//!
//! Parser tests use the fluent assertions in the [testing module](zrxp::testing).

pub mod zrxp;

pub use zrxp::api::{parse, parse_bulk, parse_file, parse_file_named, parse_named, parse_with};
pub use zrxp::ast::{Document, MetadataEntry, MetadataKey, Record, RecordSet, TimeSeriesBlock};
pub use zrxp::error::ZrxpError;
pub use zrxp::strategy::ParseStrategy;
