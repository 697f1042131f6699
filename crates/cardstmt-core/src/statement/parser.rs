//! Statement parser composing detection, field rules and the table scanner.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ParseError;
use crate::models::config::ExtractionConfig;
use crate::models::statement::{Issuer, ParsedStatement, Transaction};

use super::detector::IssuerDetector;
use super::profiles::profile;
use super::rules::{extract_field, StatementField};
use super::scanner::{TransactionScanner, MAX_TRANSACTIONS};
use super::Result;

/// Trait for statement parsing.
pub trait StatementParser {
    /// Parse a statement from its extracted text.
    fn parse(&self, text: &str) -> Result<ParsedStatement>;
}

/// Parser driven by the declarative issuer profiles.
pub struct CardStatementParser {
    detector: IssuerDetector,
    /// Maximum number of transactions to keep.
    max_transactions: usize,
}

impl CardStatementParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            detector: IssuerDetector::new(),
            max_transactions: MAX_TRANSACTIONS,
        }
    }

    /// Create a parser from extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_max_transactions(config.max_transactions)
    }

    /// Set the transaction cap. Values above [`MAX_TRANSACTIONS`] are clamped.
    pub fn with_max_transactions(mut self, max: usize) -> Self {
        self.max_transactions = max.min(MAX_TRANSACTIONS);
        self
    }

    fn extract_transactions(&self, text: &str, issuer: Issuer) -> Vec<Transaction> {
        match &profile(issuer).table {
            Some(table) => TransactionScanner::new(table, self.max_transactions).scan(text),
            None => Vec::new(),
        }
    }
}

impl Default for CardStatementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser for CardStatementParser {
    fn parse(&self, text: &str) -> Result<ParsedStatement> {
        let start = Instant::now();

        if text.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        info!("Parsing statement from {} characters of text", text.len());

        let issuer = self.detector.detect(text).ok_or(ParseError::UnknownIssuer)?;

        let statement = ParsedStatement {
            issuer,
            card_number: extract_field(StatementField::CardNumber, text, issuer),
            billing_cycle: extract_field(StatementField::BillingCycle, text, issuer),
            due_date: extract_field(StatementField::DueDate, text, issuer),
            total_balance: extract_field(StatementField::TotalBalance, text, issuer),
            transactions: self.extract_transactions(text, issuer),
        };

        let missing = statement.missing_fields();
        if !missing.is_empty() {
            debug!("{} statement missing: {}", issuer, missing.join(", "));
        }

        debug!(
            "Parsed {} statement with {} transactions in {:?}",
            issuer,
            statement.transactions.len(),
            start.elapsed()
        );

        Ok(statement)
    }
}
