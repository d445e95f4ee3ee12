//! Tabular report writer.
//!
//! Plain CSV output in two orientations. The field-label order comes from
//! [`EquipmentRecord::FIELD_LABELS`] and is part of the schema other tools
//! consume - do not reorder.

use std::path::Path;

use chrono::Local;

use hxtract_core::{EquipmentRecord, RecordBatch};

/// Write a report with one row per record.
pub fn write_rows(path: &Path, batch: &RecordBatch) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["来源"];
    header.extend(EquipmentRecord::FIELD_LABELS);
    writer.write_record(&header)?;

    for entry in batch.iter() {
        let mut row = vec![entry.source.as_str()];
        row.extend(entry.record.values());
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a report with one column per record: field labels down the first
/// column, one equipment column per source, trailing provenance notes.
pub fn write_columns(path: &Path, batch: &RecordBatch) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    let mut header = vec!["字段名".to_string()];
    header.extend(batch.iter().map(column_title));
    writer.write_record(&header)?;

    for (index, label) in EquipmentRecord::FIELD_LABELS.iter().enumerate() {
        let mut row = vec![label.to_string()];
        row.extend(
            batch
                .iter()
                .map(|entry| entry.record.values()[index].to_string()),
        );
        writer.write_record(&row)?;
    }

    writer.write_record(["说明"])?;
    writer.write_record([
        "生成时间".to_string(),
        Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    ])?;
    writer.write_record(["识别图纸数".to_string(), batch.len().to_string()])?;

    writer.flush()?;
    Ok(())
}

/// Column title for a record: product code, then equipment name, then the
/// source identifier.
fn column_title(entry: &hxtract_core::BatchEntry) -> String {
    if !entry.record.product_code.is_empty() {
        entry.record.product_code.clone()
    } else if !entry.record.equipment_name.is_empty() {
        entry.record.equipment_name.clone()
    } else {
        entry.source.clone()
    }
}

/// Per-source processing status for the batch summary.
pub struct SourceStatus<'a> {
    pub source: &'a str,
    pub error: Option<&'a str>,
}

/// Write the per-source summary CSV.
pub fn write_summary(path: &Path, statuses: &[SourceStatus<'_>]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["source", "status", "error"])?;
    for status in statuses {
        match status.error {
            Some(error) => writer.write_record([status.source, "skipped", error])?,
            None => writer.write_record([status.source, "extracted", ""])?,
        }
    }

    writer.flush()?;
    Ok(())
}

/// Render a single record as CSV (header row plus one data row).
pub fn format_record_csv(record: &EquipmentRecord) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(EquipmentRecord::FIELD_LABELS)?;
    writer.write_record(record.values())?;

    let data = String::from_utf8(writer.into_inner()?)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hxtract_core::DatasheetExtractor;

    fn sample_batch() -> RecordBatch {
        let extractor = DatasheetExtractor::new();
        extractor.extract_batch([
            ("sheet-a", Some("JOB NO.\n25AB001\n设备净重 kg 8102")),
            ("sheet-b", Some("换热面积 m² 114")),
        ])
    }

    #[test]
    fn test_write_rows_preserves_order_and_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        write_rows(&path, &sample_batch()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("来源,产品编号,用户信息"));
        assert!(lines[1].starts_with("sheet-a,25AB001"));
        assert!(lines[2].starts_with("sheet-b,"));
    }

    #[test]
    fn test_write_columns_titles_fall_back_to_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        write_columns(&path, &sample_batch()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        // sheet-a has a product code, sheet-b falls back to its source id
        assert_eq!(header, "字段名,25AB001,sheet-b");
    }

    #[test]
    fn test_format_record_csv_uses_field_labels() {
        let record = EquipmentRecord::default();
        let csv = format_record_csv(&record).unwrap();
        let header = csv.lines().next().unwrap();
        assert!(header.starts_with("产品编号,用户信息,设备名称"));
    }
}
