//! Data-sheet field extraction module.

mod extractor;
pub mod rules;

pub use extractor::{DatasheetExtractor, extract};

use serde::{Deserialize, Serialize};

/// Drawing layout convention a rule catalog is tuned for.
///
/// Process-flow sheets carry two parallel process streams per labeled row
/// ("流程一"/"流程二"); simple-label sheets carry one value per label. One
/// catalog serves both, switched by this flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawingStyle {
    /// Dual-stream technical data tables.
    #[default]
    ProcessFlow,
    /// Single-value labeled sheets.
    SimpleLabel,
}
