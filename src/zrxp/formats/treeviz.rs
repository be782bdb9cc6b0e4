//! Treeviz formatter for documents

use crate::zrxp::ast::{Document, MetadataEntry, MetadataKey, RecordSet, TimeSeriesBlock};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    for (i, block) in doc.blocks.iter().enumerate() {
        let is_last = i == doc.blocks.len() - 1;
        append_block(&mut result, i, block, is_last);
    }
    result
}

/// Blocks are labelled by station name, falling back to station number
fn block_label(index: usize, block: &TimeSeriesBlock) -> String {
    block
        .get(MetadataKey::StationName)
        .or_else(|| block.get(MetadataKey::StationNumber))
        .map(|label| truncate(label, 30))
        .unwrap_or_else(|| format!("#{}", index + 1))
}

fn append_block(result: &mut String, index: usize, block: &TimeSeriesBlock, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{} block: {}\n", connector, block_label(index, block)));

    let prefix = if is_last { "  " } else { "│ " };
    for entry in &block.metadata {
        result.push_str(&format!("{}├─ metadata: {}\n", prefix, entry_label(entry)));
    }
    append_records(result, &block.records, prefix);
}

fn entry_label(entry: &MetadataEntry) -> String {
    match entry.key {
        Some(key) => format!("{} = {}", key, truncate(&entry.value, 30)),
        None => truncate(&entry.value, 30),
    }
}

fn append_records(result: &mut String, records: &RecordSet, prefix: &str) {
    match records {
        RecordSet::Records(rows) => {
            result.push_str(&format!("{}└─ records: {}\n", prefix, rows.len()));
            let row_prefix = format!("{}  ", prefix);
            for (i, row) in rows.iter().enumerate() {
                let connector = if i == rows.len() - 1 { "└─" } else { "├─" };
                result.push_str(&format!(
                    "{}{} record: {}\n",
                    row_prefix,
                    connector,
                    truncate(&row.join(" "), 30)
                ));
            }
        }
        RecordSet::Raw(text) => {
            let lines = text.lines().filter(|line| !line.trim().is_empty()).count();
            result.push_str(&format!("{}└─ raw: {} lines\n", prefix, lines));
        }
    }
}
