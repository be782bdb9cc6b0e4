//! AST definitions for the ZRXP format
//!
//! ## Modules
//!
//! - `node` - the document model: documents, blocks, metadata and records
//! - `keys` - the closed metadata key enumeration
//! - `span` - Position and Span types for source locations
//! - `position` - conversion from byte offsets to positions

pub mod keys;
pub mod node;
pub mod position;
pub mod span;

pub use keys::{MetadataKey, UnknownKey};
pub use node::{Document, Field, MetadataEntry, Record, RecordSet, TimeSeriesBlock};
pub use position::SourceLocation;
pub use span::{Position, Span};
