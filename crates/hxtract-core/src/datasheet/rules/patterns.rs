//! Regex patterns for data-sheet field extraction.
//!
//! OCR output mixes Chinese and English template dialects; patterns come in
//! per-dialect variants and are chained in the catalog.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Product code (JOB NO. / 产品编号)
    pub static ref JOB_NO_BLOCK: Regex = Regex::new(
        r"(?:JOB NO\.|产品编号)\s*\n\s*([A-Z0-9-]+)"
    ).unwrap();

    pub static ref JOB_NO_INLINE: Regex = Regex::new(
        r"产品编号\s*[:：]?\s*([A-Z0-9-]+)"
    ).unwrap();

    pub static ref JOB_NO_BARE: Regex = Regex::new(
        r"\b(\d{2}[A-Z]{2}\d{3})\b"
    ).unwrap();

    // Client / owner (业主 / CLIENT)
    pub static ref CLIENT_LINE: Regex = Regex::new(
        r"(?:业主|CLIENT)\s*(?:LCLIENT)?\s*(?:PROJECT\s*NO\.)?\s*[:：]?\s*([^\n]+)"
    ).unwrap();

    pub static ref COMPANY_TOKEN: Regex = Regex::new(
        r"([^\s,，。;；]+(?:公司|有限|股份|能源)[^\s,，。;；]*)"
    ).unwrap();

    // Equipment name (DRAWING TITLE / 图纸名称)
    pub static ref DRAWING_TITLE_BLOCK: Regex = Regex::new(
        r"(?:DRAWING\s*TITLE:|图纸名称)\s*[:：]*\s*\n\s*([^\n]+)"
    ).unwrap();

    pub static ref DRAWING_TITLE_INLINE: Regex = Regex::new(
        r"图纸名称\s*[:：]\s*([^\n]+)"
    ).unwrap();

    // Unit count (台数)
    pub static ref UNIT_COUNT: Regex = Regex::new(
        r"台数\s*[:：]?\s*(\d+)"
    ).unwrap();

    // Unit weight (设备净重)
    pub static ref NET_WEIGHT: Regex = Regex::new(
        r"设备净重\s*kg\s*(\d+)"
    ).unwrap();

    pub static ref BARE_WEIGHT: Regex = Regex::new(
        r"(\d{4,})\s*kg\b"
    ).unwrap();

    // Medium names (介质 名称), dual-stream then single fallback. The pair
    // form runs to the next toxicity/explosion cell so the cold-side name
    // may span a wrapped line.
    pub static ref MEDIUM_PAIR: Regex = Regex::new(
        r"(?s)介质[^\n]*?名称\s+(\S+)\s+(.+?)(?:毒性|爆炸|$)"
    ).unwrap();

    pub static ref MEDIUM_SINGLE: Regex = Regex::new(
        r"介质[^\n]*?名称\s+(\S+)"
    ).unwrap();

    // Plate-pass / shell-pass mediums, explicit labels only
    pub static ref PASS_MEDIUM_PAIR: Regex = Regex::new(
        r"(?:板程|壳程)[^\n]*?介质[^\n]*?(?:名称)?\s+(\S+)\s+(\S+)"
    ).unwrap();

    pub static ref PASS_MEDIUM_SINGLE: Regex = Regex::new(
        r"(?:板程|壳程)[^\n]*?介质[^\n]*?(?:名称)?\s+(\S+)"
    ).unwrap();

    // Design-qualified value pairs. All anchor at 设计 so that values under
    // an 操作 qualifier on the same line are never captured.
    pub static ref DESIGN_PAIR_NUMERIC: Regex = Regex::new(
        r"设计\s+([\d./]+)\s+([\d./]+)"
    ).unwrap();

    pub static ref DESIGN_PAIR_ANNOTATED: Regex = Regex::new(
        r"([\d.]+/[A-Z]+)\s+([\d.]+/[A-Z]+)"
    ).unwrap();

    pub static ref DESIGN_PAIR_INTEGER: Regex = Regex::new(
        r"设计\s+(\d+)\s+(\d+)"
    ).unwrap();

    pub static ref DESIGN_SINGLE_DECIMAL: Regex = Regex::new(
        r"设计\s*([\d.]+)"
    ).unwrap();

    pub static ref DESIGN_SINGLE_INTEGER: Regex = Regex::new(
        r"设计\s*(\d+)"
    ).unwrap();

    // Simple-label sheets: one value per label, units nearby
    pub static ref SIMPLE_PRESSURE: Regex = Regex::new(
        r"压力\s*(?:MPa)?(?:\(G\))?\s*设计\s*([\d.]+)"
    ).unwrap();

    pub static ref SIMPLE_PRESSURE_MPA: Regex = Regex::new(
        r"设计\s*([\d.]+)\s*MPa"
    ).unwrap();

    pub static ref SIMPLE_TEMP_INLINE: Regex = Regex::new(
        r"温度\s*(?:℃)?\s*设计\s*(\d+)"
    ).unwrap();

    pub static ref SIMPLE_TEMP_BLOCK: Regex = Regex::new(
        r"(?s)设计\s*(\d+)\s*℃"
    ).unwrap();

    // Model number (LTB series, PHE fallback)
    pub static ref MODEL_STRICT: Regex = Regex::new(
        r"(LTB\d+-\d+[A-Z]?-\d+-[\d.]+-[\d.]+)"
    ).unwrap();

    pub static ref MODEL_LOOSE: Regex = Regex::new(
        r"(LTB[0-9A-Z.-]+)"
    ).unwrap();

    pub static ref MODEL_PHE: Regex = Regex::new(
        r"(PHE\S+)"
    ).unwrap();

    // Heat-transfer area (换热面积)
    pub static ref AREA_WITH_UNIT: Regex = Regex::new(
        r"换热面积\s*m²\s*([\d.]+)"
    ).unwrap();

    pub static ref AREA_INLINE: Regex = Regex::new(
        r"换热面积\s*[:：]?\s*([\d.]+)"
    ).unwrap();

    // Parenthesized footnote markers, both ASCII and full-width
    pub static ref ANNOTATION: Regex = Regex::new(
        r"[（(][^）)]*[）)]"
    ).unwrap();
}
