use anyhow::{Context, Result};
use csv::QuoteStyle;

use crate::merge::MergedRow;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Serialize merged rows as CSV (quoted fields, header row from the record's
/// field names) and write them to `path` with a UTF-8 BOM prefix, replacing
/// any existing file.
pub fn write_csv(rows: &[MergedRow], path: &str) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let body = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush csv writer: {}", e))?;

    let mut data = Vec::with_capacity(UTF8_BOM.len() + body.len());
    data.extend_from_slice(UTF8_BOM);
    data.extend_from_slice(&body);
    std::fs::write(path, data).with_context(|| format!("failed to write {}", path))?;
    Ok(())
}
