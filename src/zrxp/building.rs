//! Document builder
//!
//! Folds the parse tree into the [`Document`] model, one reduction per node
//! kind. Header lines of a block are flattened into a single metadata list,
//! comments are dropped, and the record run is reduced according to the node
//! the strategy produced.

use tracing::{debug, trace};

use crate::zrxp::ast::{
    Document, MetadataEntry, MetadataKey, Record, RecordSet, SourceLocation, TimeSeriesBlock,
};
use crate::zrxp::parser::tree::{
    BlockNode, ByteSpan, DocumentNode, HeaderLineNode, HeaderNode, RecordLineNode, RecordsNode,
};

/// Build the document model from a parse tree over `source`
pub fn build_document(source: &str, tree: DocumentNode) -> Document {
    let location = SourceLocation::new(source);
    let blocks: Vec<TimeSeriesBlock> = tree
        .blocks
        .into_iter()
        .map(|block| build_block(source, &location, block))
        .collect();

    debug!(blocks = blocks.len(), "built document");
    Document::new(blocks)
}

fn build_block(source: &str, location: &SourceLocation, block: BlockNode) -> TimeSeriesBlock {
    let metadata: Vec<MetadataEntry> = block
        .headers
        .into_iter()
        .flat_map(|header| build_header(source, header))
        .collect();
    let records = build_records(source, block.records);
    let span = Some(location.range_to_span(&block.span));

    TimeSeriesBlock::new(metadata, records).with_span(span)
}

fn build_header(source: &str, header: HeaderNode) -> Vec<MetadataEntry> {
    match header {
        HeaderNode::Line(line) => build_header_line(source, line),
        HeaderNode::Comment(span) => {
            trace!(comment = %slice(source, &span), "dropping comment line");
            Vec::new()
        }
    }
}

fn build_header_line(source: &str, line: HeaderLineNode) -> Vec<MetadataEntry> {
    line.fields
        .iter()
        .map(|span| build_entry(slice(source, span)))
        .collect()
}

/// Split one header field into its key and value
///
/// A recognized key prefix becomes the key and the rest the value. Anything
/// else is kept whole as an unlabeled value. Values are trimmed. The parser
/// has already rejected a key with nothing after it.
pub fn build_entry(field: &str) -> MetadataEntry {
    match MetadataKey::split_prefix(field) {
        Some((key, value)) => MetadataEntry::keyed(key, value.trim()),
        None => MetadataEntry::unlabeled(field.trim()),
    }
}

fn build_records(source: &str, records: RecordsNode) -> RecordSet {
    match records {
        RecordsNode::Lines(lines) => RecordSet::Records(
            lines
                .iter()
                .map(|line| build_record(source, line))
                .collect(),
        ),
        RecordsNode::Raw(spans) => RecordSet::Raw(build_raw(source, &spans)),
    }
}

fn build_record(source: &str, line: &RecordLineNode) -> Record {
    line.fields
        .iter()
        .map(|span| slice(source, span).to_string())
        .collect()
}

/// The exact source text from the first record line to the end of the last
fn build_raw(source: &str, spans: &[ByteSpan]) -> String {
    match (spans.first(), spans.last()) {
        (Some(first), Some(last)) => slice(source, &(first.start..last.end)).to_string(),
        _ => String::new(),
    }
}

fn slice<'a>(source: &'a str, span: &ByteSpan) -> &'a str {
    source.get(span.clone()).unwrap_or_default()
}
