//! Declarative issuer profiles.
//!
//! Each profile holds an issuer's detection signatures, the ordered rules for
//! every extracted field, and its transaction table layout. Supporting a new
//! issuer means adding a profile here.

use lazy_static::lazy_static;
use rust_decimal::Decimal;

use crate::models::statement::Issuer;

use super::rules::patterns::*;
use super::rules::{AmountRange, FieldRule, Resolve, StatementField};
use super::scanner::{FlowMarkers, TableSpec};

/// Extraction configuration for one issuer.
#[derive(Debug, Clone)]
pub struct IssuerProfile {
    pub issuer: Issuer,
    /// Case-insensitive substrings identifying the issuer.
    pub signatures: &'static [&'static str],
    pub card_number: Vec<FieldRule>,
    pub billing_cycle: Vec<FieldRule>,
    pub due_date: Vec<FieldRule>,
    pub total_balance: Vec<FieldRule>,
    /// Transaction table layout, if rows are extracted for this issuer.
    pub table: Option<TableSpec>,
}

impl IssuerProfile {
    /// Profile with signatures only; every field resolves to "Not found".
    fn detect_only(issuer: Issuer, signatures: &'static [&'static str]) -> Self {
        Self {
            issuer,
            signatures,
            card_number: Vec::new(),
            billing_cycle: Vec::new(),
            due_date: Vec::new(),
            total_balance: Vec::new(),
            table: None,
        }
    }

    /// Ordered rules for a field.
    pub fn rules(&self, field: StatementField) -> &[FieldRule] {
        match field {
            StatementField::CardNumber => &self.card_number,
            StatementField::BillingCycle => &self.billing_cycle,
            StatementField::DueDate => &self.due_date,
            StatementField::TotalBalance => &self.total_balance,
        }
    }

    /// Whether any signature occurs in already-uppercased text.
    pub fn matches_upper(&self, upper_text: &str) -> bool {
        self.signatures.iter().any(|s| upper_text.contains(s))
    }
}

/// Maximum characters kept from a transaction description.
pub const MAX_DESCRIPTION_LEN: usize = 80;

fn row_amount_range() -> AmountRange {
    AmountRange::exclusive(Decimal::new(1, 2), Decimal::new(10_000_000, 0))
}

fn amount_rules(patterns: &[&'static regex::Regex], range: AmountRange) -> Vec<FieldRule> {
    patterns
        .iter()
        .map(|p| FieldRule::new(*p, Resolve::Amount { group: 1, range }))
        .collect()
}

fn hdfc() -> IssuerProfile {
    let balance_range = AmountRange::inclusive(Decimal::ONE, Decimal::new(100_000_000, 0));

    IssuerProfile {
        issuer: Issuer::Hdfc,
        signatures: &["HDFC BANK", "HDFCBANK"],
        card_number: vec![
            FieldRule::new(&*HDFC_CARD_MASKED, Resolve::Group(3)),
            FieldRule::new(&*HDFC_CARD_SPACED, Resolve::Concat { first: 9, last: 12 }),
        ],
        billing_cycle: vec![
            FieldRule::new(&*HDFC_STATEMENT_DATE, Resolve::Group(1)),
            FieldRule::new(&*HDFC_STATEMENT_FOR, Resolve::Group(1)),
        ],
        due_date: vec![
            FieldRule::new(&*HDFC_DUE_DATE_HEADER, Resolve::Group(1)),
            FieldRule::new(&*HDFC_DUE_DATE_LABELED, Resolve::Group(1)),
        ],
        total_balance: amount_rules(
            &[&*HDFC_TOTAL_HEADER, &*HDFC_TOTAL_NEXT_LINE, &*HDFC_TOTAL_LABELED],
            balance_range,
        ),
        table: Some(TableSpec {
            header: &*HDFC_TABLE_HEADER,
            terminators: vec![
                &*HDFC_END_REWARDS,
                &*HDFC_END_INTERNATIONAL,
                &*HDFC_END_FOOTER,
                &*HDFC_END_PAGE,
            ],
            row: &*HDFC_ROW,
            cleanup: Some(&*HDFC_REFERENCE),
            min_description_len: 5,
            max_description_len: MAX_DESCRIPTION_LEN,
            amount_range: row_amount_range(),
            markers: FlowMarkers { credit: " Cr", debit: "" },
        }),
    }
}

fn icici() -> IssuerProfile {
    let balance_range = AmountRange::inclusive(Decimal::new(1, 2), Decimal::new(100_000_000, 0));

    IssuerProfile {
        issuer: Issuer::Icici,
        signatures: &["ICICI BANK", "ICICIBANK"],
        card_number: vec![
            FieldRule::new(&*ICICI_CARD_LABELED, Resolve::ZeroPadded { group: 2, width: 4 }),
            FieldRule::new(&*ICICI_CARD_MASKED, Resolve::ZeroPadded { group: 2, width: 4 }),
        ],
        billing_cycle: vec![FieldRule::new(&*ICICI_PERIOD, Resolve::Span { start: 1, end: 2 })],
        due_date: vec![FieldRule::new(&*ICICI_DUE_DATE, Resolve::Group(1))],
        total_balance: amount_rules(
            &[&*ICICI_TOTAL_INLINE, &*ICICI_TOTAL_NEXT_LINE, &*ICICI_TOTAL_LABELED],
            balance_range,
        ),
        table: Some(TableSpec {
            header: &*ICICI_TABLE_HEADER,
            terminators: vec![
                &*ICICI_END_PERIOD,
                &*ICICI_END_OFFERS,
                &*ICICI_END_SAFE_BANKING,
                &*ICICI_END_STATE_CODE,
            ],
            row: &*ICICI_ROW,
            cleanup: None,
            min_description_len: 5,
            max_description_len: MAX_DESCRIPTION_LEN,
            amount_range: row_amount_range(),
            markers: FlowMarkers { credit: " CR", debit: "" },
        }),
    }
}

fn axis() -> IssuerProfile {
    let balance_range = AmountRange::inclusive(Decimal::ONE, Decimal::new(100_000_000, 0));

    IssuerProfile {
        issuer: Issuer::Axis,
        signatures: &["AXIS BANK", "AXISBANK"],
        card_number: vec![
            FieldRule::new(&*AXIS_CARD_MASKED, Resolve::Group(2)),
            FieldRule::new(&*AXIS_CARD_LABELED, Resolve::Group(2)),
        ],
        billing_cycle: vec![
            FieldRule::new(&*AXIS_PERIOD_HEADER, Resolve::Span { start: 1, end: 2 }),
            FieldRule::new(&*AXIS_PERIOD_LABELED, Resolve::Span { start: 1, end: 2 }),
        ],
        due_date: vec![
            FieldRule::new(&*AXIS_DUE_DATE_HEADER, Resolve::Group(1)),
            FieldRule::new(&*AXIS_DUE_DATE_LABELED, Resolve::Group(1)),
        ],
        total_balance: amount_rules(
            &[&*AXIS_TOTAL_HEADER, &*AXIS_TOTAL_LABELED, &*AXIS_TOTAL_SUMMARY],
            balance_range,
        ),
        table: Some(TableSpec {
            header: &*AXIS_TABLE_HEADER,
            terminators: vec![&*AXIS_END_STATEMENT, &*AXIS_END_EMI, &*AXIS_END_CONTACT],
            row: &*AXIS_ROW,
            cleanup: Some(&*AXIS_MERCHANT_CATEGORY),
            min_description_len: 3,
            max_description_len: MAX_DESCRIPTION_LEN,
            amount_range: row_amount_range(),
            markers: FlowMarkers { credit: " Cr", debit: " Dr" },
        }),
    }
}

lazy_static! {
    /// All profiles in detection precedence order.
    pub static ref PROFILES: Vec<IssuerProfile> = vec![
        hdfc(),
        icici(),
        IssuerProfile::detect_only(Issuer::SbiCard, &["SBI CARD", "STATE BANK"]),
        axis(),
        IssuerProfile::detect_only(Issuer::Kotak, &["KOTAK"]),
    ];
}

/// Look up the profile of an issuer.
pub fn profile(issuer: Issuer) -> &'static IssuerProfile {
    &PROFILES[issuer as usize]
}
