//! Parse tree produced by the grammar
//!
//! Nodes hold byte spans into the source instead of extracted text. The builder
//! slices the source and reduces the tree to the document model afterwards.

use std::ops::Range;

/// Byte range into the source text
pub type ByteSpan = Range<usize>;

/// Root production: one or more blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNode {
    pub blocks: Vec<BlockNode>,
}

/// A header run followed by a record run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub headers: Vec<HeaderNode>,
    pub records: RecordsNode,
    pub span: ByteSpan,
}

/// A line of the header run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderNode {
    /// `#` line with one span per `|*|`-terminated field
    Line(HeaderLineNode),
    /// `##` line
    Comment(ByteSpan),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLineNode {
    pub fields: Vec<ByteSpan>,
    pub span: ByteSpan,
}

/// The record run of a block, shaped by the parse strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordsNode {
    /// Eager: one node per record line
    Lines(Vec<RecordLineNode>),
    /// Bulk: spans of every line in the run, blank lines included
    Raw(Vec<ByteSpan>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLineNode {
    pub fields: Vec<ByteSpan>,
}
