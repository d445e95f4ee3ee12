//! The declarative rule catalog.
//!
//! One catalog per drawing style, built once and shared. Most fields are
//! identical across styles; only pressure and temperature differ (dual
//! process-stream pairs vs single labeled values with unit suffixes).

use lazy_static::lazy_static;

use super::patterns::*;
use super::{Arity, FieldSpec, Post, Rule};
use crate::datasheet::DrawingStyle;
use crate::models::record::FieldId;

/// Known plate material codes, priority order. Longer codes precede their
/// substrings so "316L" is never reported as "316".
pub const PLATE_MATERIALS: [&'static str; 6] = ["316L", "316", "304", "钛", "铜镍", "不锈钢"];

const PRESSURE_GUARDS: &[&str] = &["压力", "设计"];
const TEMPERATURE_GUARDS: &[&str] = &["温度", "设计"];

lazy_static! {
    static ref PROCESS_FLOW: Catalog = Catalog::build(DrawingStyle::ProcessFlow);
    static ref SIMPLE_LABEL: Catalog = Catalog::build(DrawingStyle::SimpleLabel);
}

/// A fixed catalog of field specs for one drawing style.
pub struct Catalog {
    specs: Vec<FieldSpec>,
}

impl Catalog {
    /// The shared catalog for a drawing style.
    pub fn for_style(style: DrawingStyle) -> &'static Catalog {
        match style {
            DrawingStyle::ProcessFlow => &PROCESS_FLOW,
            DrawingStyle::SimpleLabel => &SIMPLE_LABEL,
        }
    }

    /// Field specs in header order.
    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    fn build(style: DrawingStyle) -> Self {
        let specs = vec![
            product_code(),
            client_name(),
            equipment_name(),
            unit_count(),
            unit_weight(),
            side_mediums(),
            pass_mediums(),
            design_pressure(style),
            design_temperature(style),
            model_number(),
            plate_material(),
            heat_transfer_area(),
        ];

        Self { specs }
    }
}

fn product_code() -> FieldSpec {
    FieldSpec::new(
        FieldId::ProductCode,
        vec![
            Rule::text(&JOB_NO_BLOCK, Arity::Single),
            Rule::text(&JOB_NO_INLINE, Arity::Single),
            Rule::text(&JOB_NO_BARE, Arity::Single),
        ],
    )
}

fn client_name() -> FieldSpec {
    FieldSpec::new(
        FieldId::ClientName,
        vec![
            Rule::text(&CLIENT_LINE, Arity::Single),
            Rule::text(&COMPANY_TOKEN, Arity::Single),
        ],
    )
    .with_post(Post::CompanyName)
}

fn equipment_name() -> FieldSpec {
    FieldSpec::new(
        FieldId::EquipmentName,
        vec![
            Rule::text(&DRAWING_TITLE_BLOCK, Arity::Single),
            Rule::text(&DRAWING_TITLE_INLINE, Arity::Single),
        ],
    )
}

fn unit_count() -> FieldSpec {
    FieldSpec::new(FieldId::UnitCount, vec![Rule::text(&UNIT_COUNT, Arity::Single)])
        .with_default("1")
}

fn unit_weight() -> FieldSpec {
    FieldSpec::new(
        FieldId::UnitWeight,
        vec![
            Rule::text(&NET_WEIGHT, Arity::Single),
            Rule::text(&BARE_WEIGHT, Arity::Single),
        ],
    )
    .with_post(Post::AppendUnit(" kg"))
}

fn side_mediums() -> FieldSpec {
    FieldSpec::new(
        FieldId::SideMediums,
        vec![
            Rule::text(&MEDIUM_PAIR, Arity::Dual),
            Rule::text(&MEDIUM_SINGLE, Arity::Single),
        ],
    )
    .with_post(Post::StripAnnotations)
}

fn pass_mediums() -> FieldSpec {
    FieldSpec::new(
        FieldId::PassMediums,
        vec![
            Rule::text(&PASS_MEDIUM_PAIR, Arity::Dual),
            Rule::text(&PASS_MEDIUM_SINGLE, Arity::Single),
        ],
    )
    .with_post(Post::StripAnnotations)
}

fn design_pressure(style: DrawingStyle) -> FieldSpec {
    match style {
        DrawingStyle::ProcessFlow => FieldSpec::new(
            FieldId::DesignPressure,
            vec![
                Rule::line(PRESSURE_GUARDS, &DESIGN_PAIR_NUMERIC, Arity::Dual),
                Rule::line(PRESSURE_GUARDS, &DESIGN_PAIR_ANNOTATED, Arity::Dual),
                Rule::line(PRESSURE_GUARDS, &DESIGN_SINGLE_DECIMAL, Arity::Single),
            ],
        ),
        DrawingStyle::SimpleLabel => FieldSpec::new(
            FieldId::DesignPressure,
            vec![
                Rule::text(&SIMPLE_PRESSURE, Arity::Single),
                Rule::line(PRESSURE_GUARDS, &DESIGN_SINGLE_DECIMAL, Arity::Single),
                Rule::text(&SIMPLE_PRESSURE_MPA, Arity::Single),
            ],
        )
        .with_post(Post::AppendUnit(" MPa")),
    }
}

fn design_temperature(style: DrawingStyle) -> FieldSpec {
    match style {
        DrawingStyle::ProcessFlow => FieldSpec::new(
            FieldId::DesignTemperature,
            vec![
                Rule::line(TEMPERATURE_GUARDS, &DESIGN_PAIR_INTEGER, Arity::Dual),
                Rule::line(TEMPERATURE_GUARDS, &DESIGN_SINGLE_INTEGER, Arity::Single),
            ],
        ),
        DrawingStyle::SimpleLabel => FieldSpec::new(
            FieldId::DesignTemperature,
            vec![
                Rule::text(&SIMPLE_TEMP_INLINE, Arity::Single),
                Rule::line(TEMPERATURE_GUARDS, &DESIGN_SINGLE_INTEGER, Arity::Single),
                Rule::text(&SIMPLE_TEMP_BLOCK, Arity::Single),
            ],
        )
        .with_post(Post::AppendUnit(" ℃")),
    }
}

fn model_number() -> FieldSpec {
    FieldSpec::new(
        FieldId::ModelNumber,
        vec![
            Rule::text(&MODEL_STRICT, Arity::Single),
            Rule::text(&MODEL_LOOSE, Arity::Single),
            Rule::text(&MODEL_PHE, Arity::Single),
        ],
    )
    .with_post(Post::MinLen(6))
}

fn plate_material() -> FieldSpec {
    FieldSpec::new(FieldId::PlateMaterial, vec![Rule::token(&PLATE_MATERIALS)])
}

fn heat_transfer_area() -> FieldSpec {
    FieldSpec::new(
        FieldId::HeatTransferArea,
        vec![
            Rule::text(&AREA_WITH_UNIT, Arity::Single),
            Rule::text(&AREA_INLINE, Arity::Single),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_field_in_header_order() {
        for style in [DrawingStyle::ProcessFlow, DrawingStyle::SimpleLabel] {
            let catalog = Catalog::for_style(style);
            let fields: Vec<FieldId> = catalog.specs().iter().map(|s| s.field).collect();
            assert_eq!(fields, FieldId::ALL);
        }
    }

    #[test]
    fn test_material_priority_lists_longer_codes_first() {
        let l = PLATE_MATERIALS.iter().position(|m| *m == "316L").unwrap();
        let short = PLATE_MATERIALS.iter().position(|m| *m == "316").unwrap();
        assert!(l < short);
    }

    #[test]
    fn test_every_field_has_rules() {
        let catalog = Catalog::for_style(DrawingStyle::ProcessFlow);
        for spec in catalog.specs() {
            assert!(!spec.rules.is_empty(), "{:?} has no rules", spec.field);
        }
    }
}
