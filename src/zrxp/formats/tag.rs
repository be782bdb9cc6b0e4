//! XML-like tag serialization
//!
//! Serializes the document model to a tag format that mirrors its structure.
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <block>
//!     <metadata key="SNAME">station A</metadata>
//!     <metadata>FOOBAR x</metadata>
//!     <records>
//!       <record><field>20210101000000</field><field>1.23</field></record>
//!     </records>
//!   </block>
//! </document>
//! ```

use crate::zrxp::ast::{Document, MetadataEntry, RecordSet, TimeSeriesBlock};

/// Serialize a document to tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut result = String::new();
    result.push_str("<document>\n");
    for block in &doc.blocks {
        serialize_block(block, 1, &mut result);
    }
    result.push_str("</document>");
    result
}

fn serialize_block(block: &TimeSeriesBlock, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    output.push_str(&format!("{}<block>\n", indent));

    for entry in &block.metadata {
        serialize_entry(entry, indent_level + 1, output);
    }
    serialize_records(&block.records, indent_level + 1, output);

    output.push_str(&format!("{}</block>\n", indent));
}

fn serialize_entry(entry: &MetadataEntry, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    match entry.key {
        Some(key) => output.push_str(&format!(
            "{}<metadata key=\"{}\">{}</metadata>\n",
            indent,
            key,
            escape_xml(&entry.value)
        )),
        None => output.push_str(&format!(
            "{}<metadata>{}</metadata>\n",
            indent,
            escape_xml(&entry.value)
        )),
    }
}

fn serialize_records(records: &RecordSet, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    match records {
        RecordSet::Records(rows) if rows.is_empty() => {
            output.push_str(&format!("{}<records/>\n", indent));
        }
        RecordSet::Records(rows) => {
            output.push_str(&format!("{}<records>\n", indent));
            let row_indent = "  ".repeat(indent_level + 1);
            for row in rows {
                let fields: String = row
                    .iter()
                    .map(|field| format!("<field>{}</field>", escape_xml(field)))
                    .collect();
                output.push_str(&format!("{}<record>{}</record>\n", row_indent, fields));
            }
            output.push_str(&format!("{}</records>\n", indent));
        }
        RecordSet::Raw(text) => {
            output.push_str(&format!("{}<raw>{}</raw>\n", indent, escape_xml(text)));
        }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zrxp::api::{parse, parse_bulk};

    #[test]
    fn test_serialize_eager_document() {
        let doc = parse("#SNAME station A|*|FOOBAR x|*|\n20210101000000 1.23\n").unwrap();
        insta::assert_snapshot!(serialize_document(&doc), @r###"
        <document>
          <block>
            <metadata key="SNAME">station A</metadata>
            <metadata>FOOBAR x</metadata>
            <records>
              <record><field>20210101000000</field><field>1.23</field></record>
            </records>
          </block>
        </document>
        "###);
    }

    #[test]
    fn test_serialize_header_only_block() {
        let doc = parse("#CUNITm3/s|*|\n").unwrap();
        let output = serialize_document(&doc);
        assert!(output.contains("<metadata key=\"CUNIT\">m3/s</metadata>"));
        assert!(output.contains("<records/>"));
    }

    #[test]
    fn test_serialize_raw_records() {
        let doc = parse_bulk("#SANR1|*|\n1 2\n").unwrap();
        let output = serialize_document(&doc);
        assert!(output.contains("<raw>1 2\n</raw>"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
    }
}
