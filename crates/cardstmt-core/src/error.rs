//! Error types for the cardstmt-core library.

use thiserror::Error;

/// Main error type for the cardstmt library.
#[derive(Error, Debug)]
pub enum CardStmtError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Statement parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The PDF has pages but no extractable text (scanned or image-only).
    #[error("PDF contains no extractable text")]
    NoText,
}

/// Terminal failures of statement parsing.
///
/// Fields that cannot be extracted are not errors; they degrade to the
/// "Not found" sentinel inside an otherwise successful result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The text buffer is empty or whitespace-only.
    #[error("statement text is empty")]
    EmptyInput,

    /// No supported issuer signature occurs in the text.
    #[error("could not detect card issuer")]
    UnknownIssuer,
}

/// Result type for the cardstmt library.
pub type Result<T> = std::result::Result<T, CardStmtError>;
