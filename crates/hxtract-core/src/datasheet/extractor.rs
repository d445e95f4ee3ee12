//! Data-sheet extraction engine.

use tracing::debug;

use super::DrawingStyle;
use super::rules::{Captured, Catalog, FieldSpec, apply_post};
use crate::error::ExtractionError;
use crate::models::record::{EquipmentRecord, RecordBatch};

/// Separator joining the two process-stream values of a dual field.
const STREAM_SEPARATOR: &str = " / ";

/// Extracts [`EquipmentRecord`]s from raw OCR text.
///
/// Extraction is total: every input yields a record, unmatched fields stay
/// empty. The extractor holds no mutable state and may be shared freely.
pub struct DatasheetExtractor {
    style: DrawingStyle,
}

impl DatasheetExtractor {
    /// Create an extractor for the default (process-flow) drawing style.
    pub fn new() -> Self {
        Self::with_style(DrawingStyle::default())
    }

    /// Create an extractor for a specific drawing style.
    pub fn with_style(style: DrawingStyle) -> Self {
        Self { style }
    }

    /// Extract one record from raw OCR text.
    pub fn extract(&self, text: &str) -> EquipmentRecord {
        let text = normalize(text);
        let mut record = EquipmentRecord::default();

        for spec in Catalog::for_style(self.style).specs() {
            match extract_field(spec, &text) {
                Some(value) => {
                    debug!(field = spec.field.label(), %value, "field matched");
                    record.set(spec.field, value);
                }
                None => {
                    if let Some(default) = spec.default {
                        record.set(spec.field, default.to_string());
                    }
                }
            }
        }

        record
    }

    /// Extract one record from raw OCR bytes.
    ///
    /// This is the boundary where "input is not text" can actually occur;
    /// invalid UTF-8 is rejected instead of being silently lossy.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<EquipmentRecord, ExtractionError> {
        let text = std::str::from_utf8(bytes).map_err(|_| ExtractionError::InvalidInput)?;
        Ok(self.extract(text))
    }

    /// Extract records for an ordered set of sources.
    ///
    /// A source whose text is `None` (OCR failed upstream) is skipped: no
    /// record is emitted for it and the remaining sources are unaffected.
    /// Output order follows input order.
    pub fn extract_batch<I, S, T>(&self, items: I) -> RecordBatch
    where
        I: IntoIterator<Item = (S, Option<T>)>,
        S: Into<String>,
        T: AsRef<str>,
    {
        let mut batch = RecordBatch::new();

        for (source, text) in items {
            let source = source.into();
            match text {
                Some(text) => batch.push(source, self.extract(text.as_ref())),
                None => debug!(%source, "no raw text for source, skipping"),
            }
        }

        batch
    }
}

impl Default for DatasheetExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract one record with the default drawing style.
pub fn extract(text: &str) -> EquipmentRecord {
    DatasheetExtractor::new().extract(text)
}

/// Normalize whitespace variants across OCR engines. Different providers
/// emit non-breaking or ideographic spaces where the table had cell gaps.
fn normalize(text: &str) -> String {
    text.replace(['\u{00a0}', '\u{3000}'], " ")
}

fn extract_field(spec: &FieldSpec, text: &str) -> Option<String> {
    for rule in &spec.rules {
        if let Some(captured) = rule.apply(text) {
            if let Some(value) = resolve(captured, spec) {
                return Some(value);
            }
        }
    }
    None
}

/// Post-process a captured value and, for dual captures, join the stream
/// pair. A dual capture whose second side post-processes to nothing falls
/// back to the first side alone - never a dangling separator, never a
/// swapped stream order.
fn resolve(captured: Captured, spec: &FieldSpec) -> Option<String> {
    match captured {
        Captured::Single(value) => apply_post(value, &spec.post),
        Captured::Dual(first, second) => {
            let first = apply_post(first, &spec.post);
            let second = apply_post(second, &spec.post);
            match (first, second) {
                (Some(first), Some(second)) => {
                    Some(format!("{first}{STREAM_SEPARATOR}{second}"))
                }
                (Some(first), None) => Some(first),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::record::{EquipmentRecord, FieldId};

    const SAMPLE_SHEET: &str = "技术数据表\n\
        项目 程 流程一 流程二 项目 程 流程一 流程二\n\
        压力 设计 0.8/FV 1.0/FV 焊接接头系数 0.85 0.85\n\
        MPa(G) 操作 0.5 0.02 无损检测方法 RT\n\
        温度 设计 220 220 耐压 1.40/- 液压\n\
        介质 名称 低压蒸汽及凝液 碳酸钾溶液及蒸气(注6)\n\
        毒性程度 中度危害\n\
        程数 mm 1 1\n\
        风速 m/s 1.3 设备净重 kg 8102\n\
        地面粗糙度 A 换热面积 m² 114\n\
        板片 316L 侧板 S31603\n\
        JOB NO.\n\
        25AB001\n\
        DRAWING TITLE:\n\
        蒸汽煮沸器Ⅱ LTB2-500A-1-1.2-1.0\n\
        业主 CLIENT 伊泰伊犁能源有限公司\n";

    #[test]
    fn test_extract_process_flow_sheet() {
        let record = extract(SAMPLE_SHEET);

        assert_eq!(record.product_code, "25AB001");
        assert_eq!(record.client_name, "伊泰伊犁能源有限公司");
        assert_eq!(record.equipment_name, "蒸汽煮沸器Ⅱ LTB2-500A-1-1.2-1.0");
        assert_eq!(record.unit_count, "1");
        assert_eq!(record.unit_weight, "8102 kg");
        assert_eq!(record.side_mediums, "低压蒸汽及凝液 / 碳酸钾溶液及蒸气");
        assert_eq!(record.pass_mediums, "");
        assert_eq!(record.design_pressure, "0.8/FV / 1.0/FV");
        assert_eq!(record.design_temperature, "220 / 220");
        assert_eq!(record.model_number, "LTB2-500A-1-1.2-1.0");
        assert_eq!(record.plate_material, "316L");
        assert_eq!(record.heat_transfer_area, "114");
    }

    #[test]
    fn test_extraction_is_total_and_idempotent() {
        for text in ["", "无关内容", SAMPLE_SHEET] {
            let first = extract(text);
            let second = extract(text);
            assert_eq!(first, second);
            assert_eq!(first.values().len(), EquipmentRecord::FIELD_LABELS.len());
        }
    }

    #[test]
    fn test_empty_input_yields_defaults_only() {
        let record = extract("");

        for field in FieldId::ALL {
            let expected = if field == FieldId::UnitCount { "1" } else { "" };
            assert_eq!(record.get(field), expected, "{:?}", field);
        }
    }

    #[test]
    fn test_design_pressure_end_to_end() {
        let record = extract("压力 设计 0.8/FV 1.0/FV");
        assert_eq!(record.design_pressure, "0.8/FV / 1.0/FV");
    }

    #[test]
    fn test_unit_weight_end_to_end() {
        let record = extract("设备净重 kg 8102");
        assert_eq!(record.unit_weight, "8102 kg");
    }

    #[test]
    fn test_unit_count_defaults_to_one() {
        let record = extract("换热面积 m² 114");
        assert_eq!(record.unit_count, "1");
    }

    #[test]
    fn test_unit_count_explicit_value_wins() {
        let record = extract("台数 2");
        assert_eq!(record.unit_count, "2");
    }

    #[test]
    fn test_operating_pressure_alone_never_matches() {
        let record = extract("操作压力 0.5");
        assert_eq!(record.design_pressure, "");
    }

    #[test]
    fn test_design_wins_when_operating_on_same_line() {
        // Both qualifiers on one line: only the design-anchored value is
        // captured, falling back to the single-value rule.
        let record = extract("压力 MPa(G) 设计 0.8 操作 0.5");
        assert_eq!(record.design_pressure, "0.8");
    }

    #[test]
    fn test_dual_fallback_leaves_second_stream_empty() {
        let record = extract("压力 设计 0.8/FV");
        assert_eq!(record.design_pressure, "0.8");
        assert!(!record.design_pressure.contains(STREAM_SEPARATOR));
    }

    #[test]
    fn test_dual_fields_are_well_formed() {
        let record = extract(SAMPLE_SHEET);

        for value in [&record.design_pressure, &record.design_temperature, &record.side_mediums] {
            let sides: Vec<&str> = value.split(STREAM_SEPARATOR).collect();
            assert_eq!(sides.len(), 2, "{value}");
            assert!(sides.iter().all(|side| !side.is_empty()), "{value}");
        }
    }

    #[test]
    fn test_medium_annotation_stripped() {
        let record = extract("介质 名称 低压蒸汽及凝液 碳酸钾溶液及蒸气(注6)\n毒性程度 中度危害");
        assert_eq!(record.side_mediums, "低压蒸汽及凝液 / 碳酸钾溶液及蒸气");
        assert!(!record.side_mediums.contains('('));
        assert!(!record.side_mediums.contains(')'));
        assert!(!record.side_mediums.contains("注6"));
    }

    #[test]
    fn test_material_priority_316l_over_316() {
        let record = extract("板片 316L 侧板 S31603");
        assert_eq!(record.plate_material, "316L");
    }

    #[test]
    fn test_material_falls_back_to_plain_316() {
        let record = extract("板片 316 压板 Q345R");
        assert_eq!(record.plate_material, "316");
    }

    #[test]
    fn test_simple_label_style_appends_units() {
        let extractor = DatasheetExtractor::with_style(DrawingStyle::SimpleLabel);
        let record = extractor.extract("压力 MPa(G) 设计 0.8\n温度 ℃ 设计 220");

        assert_eq!(record.design_pressure, "0.8 MPa");
        assert_eq!(record.design_temperature, "220 ℃");
    }

    #[test]
    fn test_product_code_fallback_chain() {
        let labeled = extract("JOB NO.\n25AB001");
        assert_eq!(labeled.product_code, "25AB001");

        let inline = extract("产品编号: 25AB002");
        assert_eq!(inline.product_code, "25AB002");

        let bare = extract("编号栏 25AB003 规格");
        assert_eq!(bare.product_code, "25AB003");
    }

    #[test]
    fn test_extract_batch_preserves_order_and_skips_failures() {
        let extractor = DatasheetExtractor::new();
        let batch = extractor.extract_batch([
            ("a", Some("设备净重 kg 8102")),
            ("b", None),
            ("c", Some("换热面积 m² 114")),
        ]);

        let sources: Vec<&str> = batch.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, ["a", "c"]);
        assert_eq!(batch.entries[0].record.unit_weight, "8102 kg");
        assert_eq!(batch.entries[1].record.heat_transfer_area, "114");
    }

    #[test]
    fn test_extract_bytes_rejects_invalid_utf8() {
        let extractor = DatasheetExtractor::new();
        assert!(matches!(
            extractor.extract_bytes(&[0xff, 0xfe, 0x80]),
            Err(ExtractionError::InvalidInput)
        ));

        let record = extractor.extract_bytes("设备净重 kg 8102".as_bytes()).unwrap();
        assert_eq!(record.unit_weight, "8102 kg");
    }

    #[test]
    fn test_nonbreaking_spaces_normalized() {
        let record = extract("设备净重\u{00a0}kg\u{00a0}8102");
        assert_eq!(record.unit_weight, "8102 kg");
    }
}
