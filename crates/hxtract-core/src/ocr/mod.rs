//! OCR provider interface.
//!
//! The extraction core never performs I/O; recognition is delegated to a
//! remote vision-OCR service behind the [`OcrProvider`] seam. The bundled
//! HTTP client lives behind the `provider` cargo feature.

#[cfg(feature = "provider")]
mod client;

#[cfg(feature = "provider")]
pub use client::VisionOcrClient;

use std::path::Path;

use crate::error::OcrError;

/// Default recognition prompt ("output only the text in the image").
pub const DEFAULT_PROMPT: &str = "请仅输出图像中的文本内容。";

/// A vision-OCR service turning a drawing image into raw text.
///
/// Implementations block until the provider answers or the configured
/// timeout elapses. Every failure mode means the same thing to callers:
/// no raw text is available for this source.
pub trait OcrProvider {
    /// Recognize the text in one image.
    fn recognize(&self, image: &[u8], mime: &str, prompt: &str) -> Result<String, OcrError>;
}

/// MIME type for an image path, by extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "image/jpeg",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path(Path::new("sheet.PNG")), "image/png");
        assert_eq!(mime_for_path(Path::new("sheet.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("sheet")), "image/jpeg");
    }
}
