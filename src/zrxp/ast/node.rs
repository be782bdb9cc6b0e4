//! Document model produced by the builder
//!
//! The model is plain owned data: a [`Document`] owns its blocks, each block
//! owns its metadata and records. Nothing is shared and nothing is mutated
//! after the builder returns it.

use super::keys::MetadataKey;
use super::span::Span;
use serde::{Deserialize, Serialize};

/// One data field of a record line
pub type Field = String;

/// One data line, split into fields. Arity may differ from line to line.
pub type Record = Vec<Field>;

/// A parsed ZRXP file: its time series blocks in file order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<TimeSeriesBlock>,
}

impl Document {
    pub fn new(blocks: Vec<TimeSeriesBlock>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSeriesBlock> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a TimeSeriesBlock;
    type IntoIter = std::slice::Iter<'a, TimeSeriesBlock>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// A metadata header together with the records that follow it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesBlock {
    pub metadata: Vec<MetadataEntry>,
    pub records: RecordSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

impl TimeSeriesBlock {
    pub fn new(metadata: Vec<MetadataEntry>, records: RecordSet) -> Self {
        Self {
            metadata,
            records,
            span: None,
        }
    }

    pub fn with_span(mut self, span: Option<Span>) -> Self {
        self.span = span;
        self
    }

    /// Value of the first entry carrying `key`
    pub fn get(&self, key: MetadataKey) -> Option<&str> {
        self.metadata
            .iter()
            .find(|entry| entry.key == Some(key))
            .map(|entry| entry.value.as_str())
    }

    /// Values of every entry carrying `key`, in header order
    pub fn get_all(&self, key: MetadataKey) -> impl Iterator<Item = &str> + '_ {
        self.metadata
            .iter()
            .filter(move |entry| entry.key == Some(key))
            .map(|entry| entry.value.as_str())
    }

    /// Entries without a recognized key, in header order
    pub fn unlabeled(&self) -> impl Iterator<Item = &MetadataEntry> + '_ {
        self.metadata.iter().filter(|entry| entry.key.is_none())
    }
}

/// One `|*|`-terminated header field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataEntry {
    pub key: Option<MetadataKey>,
    pub value: String,
}

impl MetadataEntry {
    pub fn new(key: Option<MetadataKey>, value: impl Into<String>) -> Self {
        Self {
            key,
            value: value.into(),
        }
    }

    pub fn keyed(key: MetadataKey, value: impl Into<String>) -> Self {
        Self::new(Some(key), value)
    }

    pub fn unlabeled(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }
}

/// Records of one block, in the representation chosen by the parse strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordSet {
    /// Record lines split into fields at parse time
    Records(Vec<Record>),
    /// Verbatim text of the record lines, for a tabular reader
    Raw(String),
}

impl RecordSet {
    /// Check if the block carries no record data
    pub fn is_empty(&self) -> bool {
        match self {
            RecordSet::Records(records) => records.is_empty(),
            RecordSet::Raw(text) => text.trim().is_empty(),
        }
    }

    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            RecordSet::Records(records) => Some(records),
            RecordSet::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            RecordSet::Records(_) => None,
            RecordSet::Raw(text) => Some(text),
        }
    }

    /// Records as rows, reading raw text with the default tabular reader
    pub fn to_records(&self) -> Vec<Record> {
        match self {
            RecordSet::Records(records) => records.clone(),
            RecordSet::Raw(text) => crate::zrxp::tabular::TabularReader::new().read(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block() -> TimeSeriesBlock {
        TimeSeriesBlock::new(
            vec![
                MetadataEntry::keyed(MetadataKey::StationName, "Greim"),
                MetadataEntry::unlabeled("FOOBAR x"),
                MetadataEntry::keyed(MetadataKey::ChannelUnit, "m3/s"),
                MetadataEntry::keyed(MetadataKey::StationName, "Greim 2"),
            ],
            RecordSet::Records(vec![]),
        )
    }

    #[test]
    fn test_get_returns_first_match() {
        let block = sample_block();
        assert_eq!(block.get(MetadataKey::StationName), Some("Greim"));
        assert_eq!(block.get(MetadataKey::ChannelUnit), Some("m3/s"));
        assert_eq!(block.get(MetadataKey::Timezone), None);
    }

    #[test]
    fn test_get_all_keeps_order() {
        let block = sample_block();
        let names: Vec<&str> = block.get_all(MetadataKey::StationName).collect();
        assert_eq!(names, vec!["Greim", "Greim 2"]);
    }

    #[test]
    fn test_unlabeled() {
        let block = sample_block();
        let values: Vec<&str> = block.unlabeled().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["FOOBAR x"]);
    }

    #[test]
    fn test_record_set_emptiness() {
        assert!(RecordSet::Records(vec![]).is_empty());
        assert!(RecordSet::Raw(String::new()).is_empty());
        assert!(RecordSet::Raw("\n\n".to_string()).is_empty());
        assert!(!RecordSet::Raw("1 2\n".to_string()).is_empty());
    }

    #[test]
    fn test_raw_to_records() {
        let raw = RecordSet::Raw("20210101 1.5\n20210102 2.5 200\n".to_string());
        assert_eq!(
            raw.to_records(),
            vec![
                vec!["20210101".to_string(), "1.5".to_string()],
                vec![
                    "20210102".to_string(),
                    "2.5".to_string(),
                    "200".to_string()
                ],
            ]
        );
    }

    #[test]
    fn test_span_skipped_in_json_when_absent() {
        let block = TimeSeriesBlock::new(
            vec![MetadataEntry::keyed(MetadataKey::StationNumber, "1")],
            RecordSet::Raw(String::new()),
        );
        let json = serde_json::to_value(&block).unwrap();
        assert!(json.get("span").is_none());
        assert_eq!(json["metadata"][0]["key"], "SANR");
        assert_eq!(json["records"]["raw"], "");
    }
}
