//! Core library for Indian credit-card statement extraction.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Issuer detection for HDFC, ICICI, SBI Card, Axis and Kotak statements
//! - Rule-based field extraction and transaction table scanning
//! - An upload adapter mapping failures to client-facing messages

pub mod api;
pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;

pub use api::{handle_upload, health, ApiError, HealthResponse, UploadRequest};
pub use error::{CardStmtError, ParseError, PdfError, Result};
pub use models::config::StatementConfig;
pub use models::statement::{
    supported_issuers, ExtractedField, Issuer, ParsedStatement, Transaction, NOT_FOUND,
};
pub use pdf::{extract_statement_text, PdfExtractor, PdfProcessor};
pub use statement::{
    detect_issuer, parse_statement, parse_statement_pdf, CardStatementParser, StatementParser,
};
