//! Error types for the hxtract-core library.

use thiserror::Error;

/// Main error type for the hxtract library.
#[derive(Error, Debug)]
pub enum HxtractError {
    /// OCR provider error.
    #[error("OCR provider error: {0}")]
    Ocr(#[from] OcrError),

    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the remote OCR provider.
///
/// Any of these means "no raw text available for this source": batch callers
/// skip the source and keep going, they never abort the whole run.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The recognition request did not complete within the configured timeout.
    #[error("recognition request timed out after {0}s")]
    Timeout(u64),

    /// The request could not be sent or the response could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {message}")]
    Provider { status: u16, message: String },

    /// The provider answered, but with no recognized text.
    #[error("provider returned an empty recognition result")]
    EmptyResponse,
}

/// Errors related to data-sheet field extraction.
///
/// A field whose rules all fail is not an error: it stays empty in the
/// record. Only structurally invalid input at the byte boundary is rejected.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Input bytes are not valid UTF-8 text.
    #[error("input is not valid UTF-8 text")]
    InvalidInput,
}

/// Result type for the hxtract library.
pub type Result<T> = std::result::Result<T, HxtractError>;
