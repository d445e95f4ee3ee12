//! Equipment record model - the normalized output of one extraction pass.

use serde::{Deserialize, Serialize};

/// Identifier for one field of an [`EquipmentRecord`].
///
/// Variant order is the header order; it is part of the public contract and
/// must not change without versioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Product code (JOB NO. / 产品编号).
    ProductCode,
    /// Client or owner name (业主 / CLIENT).
    ClientName,
    /// Equipment name from the drawing title block.
    EquipmentName,
    /// Number of units.
    UnitCount,
    /// Net weight of a single unit.
    UnitWeight,
    /// Hot-side / cold-side medium names.
    SideMediums,
    /// Plate-pass / shell-pass medium names.
    PassMediums,
    /// Design pressure, one value per process stream.
    DesignPressure,
    /// Design temperature, one value per process stream.
    DesignTemperature,
    /// Equipment model number.
    ModelNumber,
    /// Plate material code.
    PlateMaterial,
    /// Heat-transfer area.
    HeatTransferArea,
}

impl FieldId {
    /// All fields in header order.
    pub const ALL: [FieldId; 12] = [
        FieldId::ProductCode,
        FieldId::ClientName,
        FieldId::EquipmentName,
        FieldId::UnitCount,
        FieldId::UnitWeight,
        FieldId::SideMediums,
        FieldId::PassMediums,
        FieldId::DesignPressure,
        FieldId::DesignTemperature,
        FieldId::ModelNumber,
        FieldId::PlateMaterial,
        FieldId::HeatTransferArea,
    ];

    /// The header label used in reports and serialized output.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::ProductCode => "产品编号",
            FieldId::ClientName => "用户信息",
            FieldId::EquipmentName => "设备名称",
            FieldId::UnitCount => "台数",
            FieldId::UnitWeight => "单台重量",
            FieldId::SideMediums => "热侧/冷侧介质名称",
            FieldId::PassMediums => "板程/壳程介质名称",
            FieldId::DesignPressure => "设计压力/MPa",
            FieldId::DesignTemperature => "设计温度/℃",
            FieldId::ModelNumber => "设备型号",
            FieldId::PlateMaterial => "板片材质",
            FieldId::HeatTransferArea => "换热面积/㎡",
        }
    }
}

/// One extracted data-sheet record.
///
/// Every field is always present; an unresolved field is the empty string,
/// never absent. Report writers rely on the complete key set and on
/// [`EquipmentRecord::FIELD_LABELS`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    /// Product code (JOB NO.).
    #[serde(rename = "产品编号", default)]
    pub product_code: String,

    /// Client or owner name.
    #[serde(rename = "用户信息", default)]
    pub client_name: String,

    /// Equipment name from the drawing title block.
    #[serde(rename = "设备名称", default)]
    pub equipment_name: String,

    /// Number of units.
    #[serde(rename = "台数", default)]
    pub unit_count: String,

    /// Net weight of a single unit.
    #[serde(rename = "单台重量", default)]
    pub unit_weight: String,

    /// Hot-side / cold-side medium names, joined with " / ".
    #[serde(rename = "热侧/冷侧介质名称", default)]
    pub side_mediums: String,

    /// Plate-pass / shell-pass medium names, joined with " / ".
    #[serde(rename = "板程/壳程介质名称", default)]
    pub pass_mediums: String,

    /// Design pressure per process stream, joined with " / ".
    #[serde(rename = "设计压力/MPa", default)]
    pub design_pressure: String,

    /// Design temperature per process stream, joined with " / ".
    #[serde(rename = "设计温度/℃", default)]
    pub design_temperature: String,

    /// Equipment model number.
    #[serde(rename = "设备型号", default)]
    pub model_number: String,

    /// Plate material code.
    #[serde(rename = "板片材质", default)]
    pub plate_material: String,

    /// Heat-transfer area.
    #[serde(rename = "换热面积/㎡", default)]
    pub heat_transfer_area: String,
}

impl EquipmentRecord {
    /// The fixed, ordered header labels - the tabular-output schema.
    pub const FIELD_LABELS: [&'static str; 12] = [
        "产品编号",
        "用户信息",
        "设备名称",
        "台数",
        "单台重量",
        "热侧/冷侧介质名称",
        "板程/壳程介质名称",
        "设计压力/MPa",
        "设计温度/℃",
        "设备型号",
        "板片材质",
        "换热面积/㎡",
    ];

    /// Read a field by identifier.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::ProductCode => &self.product_code,
            FieldId::ClientName => &self.client_name,
            FieldId::EquipmentName => &self.equipment_name,
            FieldId::UnitCount => &self.unit_count,
            FieldId::UnitWeight => &self.unit_weight,
            FieldId::SideMediums => &self.side_mediums,
            FieldId::PassMediums => &self.pass_mediums,
            FieldId::DesignPressure => &self.design_pressure,
            FieldId::DesignTemperature => &self.design_temperature,
            FieldId::ModelNumber => &self.model_number,
            FieldId::PlateMaterial => &self.plate_material,
            FieldId::HeatTransferArea => &self.heat_transfer_area,
        }
    }

    /// Write a field by identifier.
    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::ProductCode => self.product_code = value,
            FieldId::ClientName => self.client_name = value,
            FieldId::EquipmentName => self.equipment_name = value,
            FieldId::UnitCount => self.unit_count = value,
            FieldId::UnitWeight => self.unit_weight = value,
            FieldId::SideMediums => self.side_mediums = value,
            FieldId::PassMediums => self.pass_mediums = value,
            FieldId::DesignPressure => self.design_pressure = value,
            FieldId::DesignTemperature => self.design_temperature = value,
            FieldId::ModelNumber => self.model_number = value,
            FieldId::PlateMaterial => self.plate_material = value,
            FieldId::HeatTransferArea => self.heat_transfer_area = value,
        }
    }

    /// Field values in header order.
    pub fn values(&self) -> [&str; 12] {
        [
            &self.product_code,
            &self.client_name,
            &self.equipment_name,
            &self.unit_count,
            &self.unit_weight,
            &self.side_mediums,
            &self.pass_mediums,
            &self.design_pressure,
            &self.design_temperature,
            &self.model_number,
            &self.plate_material,
            &self.heat_transfer_area,
        ]
    }
}

/// One record in a batch, tagged with its source identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Source identifier (usually the image or dump file stem).
    pub source: String,

    /// The extracted record.
    pub record: EquipmentRecord,
}

/// An ordered collection of extracted records.
///
/// Order follows input enumeration order and is preserved into tabular
/// output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBatch {
    /// Entries in input order.
    pub entries: Vec<BatchEntry>,
}

impl RecordBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for a source.
    pub fn push(&mut self, source: String, record: EquipmentRecord) {
        self.entries.push(BatchEntry { source, record });
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &BatchEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_field_order() {
        for (field, label) in FieldId::ALL.iter().zip(EquipmentRecord::FIELD_LABELS) {
            assert_eq!(field.label(), label);
        }
    }

    #[test]
    fn test_values_follow_header_order() {
        let mut record = EquipmentRecord::default();
        record.set(FieldId::ProductCode, "25AB001".to_string());
        record.set(FieldId::HeatTransferArea, "114".to_string());

        let values = record.values();
        assert_eq!(values[0], "25AB001");
        assert_eq!(values[11], "114");
        assert_eq!(record.get(FieldId::ProductCode), "25AB001");
    }

    #[test]
    fn test_serialized_keys_are_header_labels() {
        let record = EquipmentRecord::default();
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 12);
        for label in EquipmentRecord::FIELD_LABELS {
            assert!(object.contains_key(label), "missing key {label}");
        }
    }
}
