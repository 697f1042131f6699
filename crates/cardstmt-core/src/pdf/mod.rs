//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}

/// Load a PDF and return its text, failing with [`PdfError::NoText`] when
/// nothing usable is extracted.
pub fn extract_statement_text(data: &[u8], config: &PdfConfig) -> Result<String> {
    let mut extractor = PdfExtractor::with_config(config.clone());
    extractor.load(data)?;

    let text = extractor.extract_text()?;
    if text.trim().is_empty() {
        return Err(PdfError::NoText);
    }
    Ok(text)
}
