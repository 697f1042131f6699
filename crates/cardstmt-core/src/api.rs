//! Upload adapter between a transport (HTTP, WASM, CLI) and the parser.
//!
//! Rejects unusable uploads before the core sees them and maps every failure
//! to a client-facing message with an HTTP-style status code. Internal
//! details are logged, never returned.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::{CardStmtError, ParseError, PdfError};
use crate::models::config::StatementConfig;
use crate::models::statement::{supported_issuers, Issuer, ParsedStatement};
use crate::statement::{parse_statement_pdf, CardStatementParser, StatementParser};

pub const MSG_NO_FILE: &str = "No file provided";
pub const MSG_NO_FILENAME: &str = "No file selected";
pub const MSG_NOT_PDF: &str = "Only PDF files are supported";
pub const MSG_EMPTY_UPLOAD: &str = "Uploaded file is empty";
pub const MSG_NO_TEXT: &str =
    "Could not extract text from PDF. It may be scanned or password-protected.";
pub const MSG_INTERNAL: &str = "Failed to parse PDF";

/// Message for statements without a recognized issuer, listing the banks.
pub fn unknown_issuer_message() -> String {
    let banks: Vec<&str> = Issuer::ALL.iter().map(Issuer::short_name).collect();
    format!("Could not detect card issuer. Supported banks: {}", banks.join(", "))
}

/// A file received from a client.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// An upload request; `file` is `None` when the client sent no file part.
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    pub file: Option<UploadedFile>,
}

impl UploadRequest {
    pub fn new(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file: Some(UploadedFile {
                filename: filename.into(),
                data,
            }),
        }
    }

    /// A request without a file part.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Client-facing failure. Serializes as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: u16,
    #[serde(rename = "error")]
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: 400,
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self {
            status: 500,
            message: MSG_INTERNAL.to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl std::error::Error for ApiError {}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::EmptyInput => ApiError::bad_request(MSG_NO_TEXT),
            ParseError::UnknownIssuer => ApiError::bad_request(unknown_issuer_message()),
        }
    }
}

impl From<PdfError> for ApiError {
    fn from(err: PdfError) -> Self {
        match err {
            PdfError::NoText | PdfError::NoPages | PdfError::Encrypted => {
                warn!("PDF yielded no usable text: {}", err);
                ApiError::bad_request(MSG_NO_TEXT)
            }
            PdfError::Parse(_) | PdfError::TextExtraction(_) => {
                error!("PDF processing failed: {}", err);
                ApiError::internal()
            }
        }
    }
}

impl From<CardStmtError> for ApiError {
    fn from(err: CardStmtError) -> Self {
        match err {
            CardStmtError::Pdf(e) => e.into(),
            CardStmtError::Parse(e) => e.into(),
            CardStmtError::Io(_) | CardStmtError::Config(_) => {
                error!("Statement processing failed: {}", err);
                ApiError::internal()
            }
        }
    }
}

/// Service health and capability listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub supported_issuers: Vec<String>,
}

/// Static capability listing, independent of the parse path.
pub fn health() -> HealthResponse {
    HealthResponse {
        status: "ok".to_string(),
        supported_issuers: supported_issuers().into_iter().map(String::from).collect(),
    }
}

/// Validate an upload, extract its text and parse the statement.
pub fn handle_upload(
    request: &UploadRequest,
    config: &StatementConfig,
) -> Result<ParsedStatement, ApiError> {
    let file = request
        .file
        .as_ref()
        .ok_or_else(|| ApiError::bad_request(MSG_NO_FILE))?;

    if file.filename.is_empty() {
        return Err(ApiError::bad_request(MSG_NO_FILENAME));
    }
    if !config.upload.accepts(&file.filename) {
        return Err(ApiError::bad_request(MSG_NOT_PDF));
    }
    if file.data.is_empty() {
        return Err(ApiError::bad_request(MSG_EMPTY_UPLOAD));
    }

    info!("Processing upload {} ({} bytes)", file.filename, file.data.len());

    parse_statement_pdf(&file.data, config).map_err(ApiError::from)
}

/// Parse already-extracted statement text with adapter error mapping.
pub fn parse_text(text: &str, config: &StatementConfig) -> Result<ParsedStatement, ApiError> {
    let parser = CardStatementParser::from_config(&config.extraction);
    parser.parse(text).map_err(ApiError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn upload(request: UploadRequest) -> ApiError {
        handle_upload(&request, &StatementConfig::default()).unwrap_err()
    }

    #[test]
    fn test_rejects_before_parsing() {
        assert_eq!(upload(UploadRequest::empty()), ApiError::bad_request(MSG_NO_FILE));
        assert_eq!(
            upload(UploadRequest::new("", b"%PDF".to_vec())),
            ApiError::bad_request(MSG_NO_FILENAME)
        );
        assert_eq!(
            upload(UploadRequest::new("statement.png", b"%PDF".to_vec())),
            ApiError::bad_request(MSG_NOT_PDF)
        );
        assert_eq!(
            upload(UploadRequest::new("statement.pdf", Vec::new())),
            ApiError::bad_request(MSG_EMPTY_UPLOAD)
        );
    }

    #[test]
    fn test_corrupt_pdf_is_generic_internal_error() {
        let err = upload(UploadRequest::new("statement.pdf", b"not really a pdf".to_vec()));
        assert_eq!(err.status, 500);
        assert_eq!(err.message, MSG_INTERNAL);
    }

    #[test]
    fn test_parse_text_error_mapping() {
        let config = StatementConfig::default();

        let err = parse_text("   ", &config).unwrap_err();
        assert_eq!(err, ApiError::bad_request(MSG_NO_TEXT));

        let err = parse_text("Some other bank", &config).unwrap_err();
        assert_eq!(
            err.message,
            "Could not detect card issuer. Supported banks: HDFC, ICICI, SBI Card, Axis, Kotak Mahindra"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_parse_text_success() {
        let statement = parse_text("Kotak Mahindra Bank", &StatementConfig::default()).unwrap();
        assert_eq!(statement.issuer, Issuer::Kotak);
    }

    #[test]
    fn test_parse_text_honors_transaction_cap() {
        let mut config = StatementConfig::default();
        config.extraction.max_transactions = 1;

        let text = "HDFC BANK\nDomestic Transactions\n\
                    01/03/2024 FIRST MERCHANT 10.00\n\
                    02/03/2024 SECOND MERCHANT 20.00\n";
        let statement = parse_text(text, &config).unwrap();
        assert_eq!(statement.transactions.len(), 1);
    }

    #[test]
    fn test_io_fault_is_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = ApiError::from(CardStmtError::from(io));
        assert_eq!(err, ApiError::internal());
        assert!(!err.message.contains("disk"));
    }

    #[test]
    fn test_error_payload_shape() {
        let json = serde_json::to_value(ApiError::bad_request(MSG_NO_FILE)).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "No file provided" }));
    }

    #[test]
    fn test_health() {
        let json = serde_json::to_value(health()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "ok",
                "supported_issuers": [
                    "HDFC Bank",
                    "ICICI Bank",
                    "SBI Card",
                    "Axis Bank",
                    "Kotak Mahindra Bank"
                ]
            })
        );
    }
}
