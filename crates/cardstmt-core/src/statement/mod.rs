//! Card statement extraction module.

pub mod detector;
mod parser;
pub mod profiles;
pub mod rules;
pub mod scanner;

pub use detector::{detect_issuer, IssuerDetector};
pub use parser::{CardStatementParser, StatementParser};
pub use profiles::{profile, IssuerProfile};
pub use rules::{extract_field, StatementField};
pub use scanner::{TableSpec, TransactionScanner};

use crate::error::ParseError;
use crate::models::config::StatementConfig;
use crate::models::statement::ParsedStatement;
use crate::pdf::extract_statement_text;

/// Result type for statement parsing.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse statement text with the default parser.
pub fn parse_statement(text: &str) -> Result<ParsedStatement> {
    CardStatementParser::new().parse(text)
}

/// Extract the text of a statement PDF and parse it.
pub fn parse_statement_pdf(data: &[u8], config: &StatementConfig) -> crate::Result<ParsedStatement> {
    let text = extract_statement_text(data, &config.pdf)?;
    let parser = CardStatementParser::from_config(&config.extraction);
    Ok(parser.parse(&text)?)
}
