//! Fluent assertion API for parsed documents

use crate::zrxp::ast::{Document, MetadataKey, RecordSet, TimeSeriesBlock};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_document(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of blocks in the document
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.doc.blocks.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} blocks, found {} blocks: [{}]",
            expected,
            actual,
            summarize_blocks(&self.doc.blocks)
        );
        self
    }

    /// Assert on a specific block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.doc.blocks.len(),
            "Block index {} out of bounds (document has {} blocks)",
            index,
            self.doc.blocks.len()
        );

        assertion(BlockAssertion {
            block: &self.doc.blocks[index],
            context: format!("blocks[{}]", index),
        });
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a TimeSeriesBlock,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn metadata_count(self, expected: usize) -> Self {
        let actual = self.block.metadata.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} metadata entries, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the key and value of the entry at `index`
    pub fn entry(self, index: usize, key: Option<MetadataKey>, value: &str) -> Self {
        let entry = self.block.metadata.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Metadata index {} out of bounds (block has {} entries)",
                self.context,
                index,
                self.block.metadata.len()
            )
        });
        assert_eq!(
            entry.key, key,
            "{}.metadata[{}]: Expected key {:?}, found {:?}",
            self.context, index, key, entry.key
        );
        assert_eq!(
            entry.value, value,
            "{}.metadata[{}]: Expected value '{}', found '{}'",
            self.context, index, value, entry.value
        );
        self
    }

    /// Assert the value of the first entry carrying `key`
    pub fn value(self, key: MetadataKey, expected: &str) -> Self {
        match self.block.get(key) {
            Some(actual) => assert_eq!(
                actual, expected,
                "{}: Expected {} = '{}', found '{}'",
                self.context, key, expected, actual
            ),
            None => panic!("{}: No {} entry", self.context, key),
        }
        self
    }

    pub fn record_count(self, expected: usize) -> Self {
        let actual = self.records().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} records, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the fields of the record at `index`
    pub fn record(self, index: usize, expected: &[&str]) -> Self {
        let records = self.records();
        let record = records.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Record index {} out of bounds (block has {} records)",
                self.context,
                index,
                records.len()
            )
        });
        assert_eq!(
            record, expected,
            "{}.records[{}]: fields differ",
            self.context, index
        );
        self
    }

    /// Assert the block holds raw record text equal to `expected`
    pub fn raw(self, expected: &str) -> Self {
        match &self.block.records {
            RecordSet::Raw(actual) => assert_eq!(
                actual, expected,
                "{}: raw record text differs",
                self.context
            ),
            RecordSet::Records(records) => panic!(
                "{}: Expected raw records, found {} split records",
                self.context,
                records.len()
            ),
        }
        self
    }

    fn records(&self) -> &'a [Vec<String>] {
        match &self.block.records {
            RecordSet::Records(records) => records,
            RecordSet::Raw(_) => panic!(
                "{}: Expected split records, found raw record text",
                self.context
            ),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn summarize_blocks(blocks: &[TimeSeriesBlock]) -> String {
    blocks
        .iter()
        .map(|block| {
            let label = block
                .get(MetadataKey::StationNumber)
                .map(|sanr| format!("SANR {}", sanr))
                .unwrap_or_else(|| "unnumbered".to_string());
            format!("{} ({} entries)", label, block.metadata.len())
        })
        .collect::<Vec<_>>()
        .join(", ")
}
