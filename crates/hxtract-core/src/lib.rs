//! Core library for heat-exchanger data-sheet OCR processing.
//!
//! This crate provides:
//! - rule-based field extraction from raw OCR text (pressures, temperatures,
//!   weights, material codes, model numbers)
//! - batch assembly of extracted records, preserving source order
//! - a vision-OCR provider interface with a bundled HTTP client
//!
//! The extraction core is pure and synchronous: text in, record out, no I/O
//! and no ambient configuration.

pub mod datasheet;
pub mod error;
pub mod models;
pub mod ocr;

pub use datasheet::{DatasheetExtractor, DrawingStyle, extract};
pub use error::{ExtractionError, HxtractError, OcrError, Result};
pub use models::config::{HxtractConfig, Orientation, ProviderConfig};
pub use models::record::{BatchEntry, EquipmentRecord, FieldId, RecordBatch};
pub use ocr::{DEFAULT_PROMPT, OcrProvider, mime_for_path};

#[cfg(feature = "provider")]
pub use ocr::VisionOcrClient;
