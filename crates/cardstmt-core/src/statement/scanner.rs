//! Line-oriented transaction table scanner.
//!
//! The scanner walks the statement one line at a time through three states:
//!
//! ```text
//! BeforeTable --header--> InTable --terminator--> Done
//!                          |  ^
//!                          +--+ header / row / other line
//! ```
//!
//! Reaching the end of the text while `InTable` also ends the scan.

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::models::statement::Transaction;

use super::rules::{format_rupees, parse_amount, patterns::WHITESPACE, AmountRange};

/// Scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    BeforeTable,
    InTable,
    Done,
}

/// What the scanner does with the line that caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// The line is not a row (outside the table, or a header).
    Skip,
    /// The line is inside the table and may be a transaction row.
    Candidate,
    /// The line terminates the table.
    Stop,
}

/// Upper bound on transactions returned for one statement.
pub const MAX_TRANSACTIONS: usize = 10;

/// Debit/credit direction of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Debit,
    Credit,
}

impl Flow {
    /// Interpret a captured flow marker; a missing marker means debit.
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker.map(str::trim) {
            Some("Cr" | "CR") => Flow::Credit,
            _ => Flow::Debit,
        }
    }
}

/// Suffixes appended to formatted amounts, per flow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowMarkers {
    pub credit: &'static str,
    pub debit: &'static str,
}

impl FlowMarkers {
    pub fn suffix(&self, flow: Flow) -> &'static str {
        match flow {
            Flow::Credit => self.credit,
            Flow::Debit => self.debit,
        }
    }
}

/// Describes where an issuer's transaction table is and how its rows look.
///
/// The row pattern must define the named groups `date`, `desc` and `amount`,
/// and optionally `flow`.
#[derive(Debug, Clone)]
pub struct TableSpec {
    /// Line that opens the table.
    pub header: &'static Regex,
    /// Lines that close the table.
    pub terminators: Vec<&'static Regex>,
    /// Row shape, matched against the trimmed line.
    pub row: &'static Regex,
    /// Removed from the description before whitespace is collapsed.
    pub cleanup: Option<&'static Regex>,
    /// Descriptions must be strictly longer than this.
    pub min_description_len: usize,
    /// Descriptions are truncated to this many characters.
    pub max_description_len: usize,
    /// Accepted row amounts.
    pub amount_range: AmountRange,
    pub markers: FlowMarkers,
}

impl TableSpec {
    /// Pure transition: the next state and the treatment of `line`.
    pub fn step(&self, state: ScanState, line: &str) -> (ScanState, LineAction) {
        match state {
            ScanState::BeforeTable if self.header.is_match(line) => {
                (ScanState::InTable, LineAction::Skip)
            }
            ScanState::BeforeTable => (ScanState::BeforeTable, LineAction::Skip),
            ScanState::InTable if self.header.is_match(line) => {
                (ScanState::InTable, LineAction::Skip)
            }
            ScanState::InTable if self.terminators.iter().any(|t| t.is_match(line)) => {
                (ScanState::Done, LineAction::Stop)
            }
            ScanState::InTable => (ScanState::InTable, LineAction::Candidate),
            ScanState::Done => (ScanState::Done, LineAction::Stop),
        }
    }

    /// Parse a candidate line into a transaction, if it is an accepted row.
    pub fn parse_row(&self, line: &str) -> Option<Transaction> {
        let caps = self.row.captures(line.trim())?;
        self.accept_row(&caps)
    }

    fn accept_row(&self, caps: &Captures<'_>) -> Option<Transaction> {
        let date = caps.name("date")?.as_str();
        let description = self.normalize_description(caps.name("desc")?.as_str());

        if description.chars().count() <= self.min_description_len {
            trace!("Rejected row {}: description too short", date);
            return None;
        }

        let amount = parse_amount(caps.name("amount")?.as_str())?;
        if !self.amount_range.contains(amount) {
            trace!("Rejected row {}: amount {} out of range", date, amount);
            return None;
        }

        let flow = Flow::from_marker(caps.name("flow").map(|m| m.as_str()));

        Some(Transaction {
            date: date.to_string(),
            description,
            amount: format!("{}{}", format_rupees(amount), self.markers.suffix(flow)),
        })
    }

    fn normalize_description(&self, raw: &str) -> String {
        let raw = raw.trim();
        let cleaned = match self.cleanup {
            Some(cleanup) => cleanup.replace_all(raw, ""),
            None => raw.into(),
        };

        WHITESPACE
            .replace_all(&cleaned, " ")
            .trim()
            .chars()
            .take(self.max_description_len)
            .collect()
    }
}

/// Scans statement text for an issuer's transaction table.
pub struct TransactionScanner<'a> {
    table: &'a TableSpec,
    limit: usize,
}

impl<'a> TransactionScanner<'a> {
    pub fn new(table: &'a TableSpec, limit: usize) -> Self {
        Self { table, limit }
    }

    /// Collect up to `limit` accepted rows in document order.
    pub fn scan(&self, text: &str) -> Vec<Transaction> {
        let mut state = ScanState::BeforeTable;
        let mut rows = Vec::new();

        for line in text.split('\n') {
            if rows.len() >= self.limit {
                break;
            }

            let (next, action) = self.table.step(state, line);
            if next != state {
                trace!("Scanner {:?} -> {:?}", state, next);
            }
            state = next;

            match action {
                LineAction::Skip => {}
                LineAction::Stop => break,
                LineAction::Candidate => {
                    if let Some(row) = self.table.parse_row(line) {
                        rows.push(row);
                    }
                }
            }
        }

        debug!("Scanner finished in {:?} with {} rows", state, rows.len());
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::rules::patterns::{HDFC_END_PAGE, HDFC_REFERENCE, HDFC_ROW, HDFC_TABLE_HEADER};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn hdfc_table() -> TableSpec {
        TableSpec {
            header: &*HDFC_TABLE_HEADER,
            terminators: vec![&*HDFC_END_PAGE],
            row: &*HDFC_ROW,
            cleanup: Some(&*HDFC_REFERENCE),
            min_description_len: 5,
            max_description_len: 80,
            amount_range: AmountRange::exclusive(Decimal::new(1, 2), Decimal::new(10_000_000, 0)),
            markers: FlowMarkers { credit: " Cr", debit: "" },
        }
    }

    #[test]
    fn test_transitions() {
        let table = hdfc_table();

        assert_eq!(
            table.step(ScanState::BeforeTable, "01/03/2024 SOMETHING 10.00"),
            (ScanState::BeforeTable, LineAction::Skip)
        );
        assert_eq!(
            table.step(ScanState::BeforeTable, "Page 1"),
            (ScanState::BeforeTable, LineAction::Skip)
        );
        assert_eq!(
            table.step(ScanState::BeforeTable, "Domestic Transactions"),
            (ScanState::InTable, LineAction::Skip)
        );
        assert_eq!(
            table.step(ScanState::InTable, "Date   Transaction Description   Amount"),
            (ScanState::InTable, LineAction::Skip)
        );
        assert_eq!(
            table.step(ScanState::InTable, "01/03/2024 SOMETHING 10.00"),
            (ScanState::InTable, LineAction::Candidate)
        );
        assert_eq!(
            table.step(ScanState::InTable, "Page 2 of 3"),
            (ScanState::Done, LineAction::Stop)
        );
        assert_eq!(
            table.step(ScanState::Done, "Domestic Transactions"),
            (ScanState::Done, LineAction::Stop)
        );
    }

    #[test]
    fn test_parse_row_normalizes() {
        let row = hdfc_table()
            .parse_row("  01/03/2024   AMAZON    PURCHASE (Ref#99812)   1,999.00  ")
            .unwrap();
        assert_eq!(
            row,
            Transaction {
                date: "01/03/2024".to_string(),
                description: "AMAZON PURCHASE".to_string(),
                amount: "₹1,999.00".to_string(),
            }
        );

        let credit = hdfc_table().parse_row("04/03/2024 PAYMENT RECEIVED 5,000.00 Cr").unwrap();
        assert_eq!(credit.amount, "₹5,000.00 Cr");
    }

    #[test]
    fn test_parse_row_rejections() {
        let table = hdfc_table();
        // description of exactly five characters
        assert_eq!(table.parse_row("01/03/2024 ABCDE 100.00"), None);
        assert!(table.parse_row("01/03/2024 ABCDEF 100.00").is_some());
        // open interval bounds
        assert_eq!(table.parse_row("01/03/2024 TINY AMOUNT 0.01"), None);
        assert_eq!(table.parse_row("01/03/2024 HUGE AMOUNT 10,000,000.00"), None);
        assert!(table.parse_row("01/03/2024 SMALL AMOUNT 0.02").is_some());
        assert!(table.parse_row("01/03/2024 LARGE AMOUNT 9,999,999.99").is_some());
    }

    #[test]
    fn test_description_truncated_to_limit() {
        let long = "X".repeat(120);
        let row = hdfc_table().parse_row(&format!("01/03/2024 {} 10.00", long)).unwrap();
        assert_eq!(row.description.chars().count(), 80);
    }

    #[test]
    fn test_scan_stops_at_terminator() {
        let text = "Domestic Transactions\n\
                    01/03/2024 FIRST MERCHANT 10.00\n\
                    not a row\n\
                    02/03/2024 SECOND MERCHANT 20.00\n\
                    Page 2\n\
                    03/03/2024 AFTER TERMINATOR 30.00";

        let table = hdfc_table();
        let rows = TransactionScanner::new(&table, 10).scan(text);
        let descriptions: Vec<&str> = rows.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, vec!["FIRST MERCHANT", "SECOND MERCHANT"]);
    }

    #[test]
    fn test_scan_without_header_finds_nothing() {
        let table = hdfc_table();
        let rows = TransactionScanner::new(&table, 10).scan("01/03/2024 FIRST MERCHANT 10.00");
        assert!(rows.is_empty());
    }

    #[test]
    fn test_scan_caps_rows() {
        let mut text = String::from("Domestic Transactions\n");
        for day in 1..=15 {
            text.push_str(&format!("{:02}/03/2024 MERCHANT NUMBER {} 100.00\n", day, day));
        }

        let table = hdfc_table();
        let rows = TransactionScanner::new(&table, 10).scan(&text);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].date, "01/03/2024");
        assert_eq!(rows[9].date, "10/03/2024");
    }
}
