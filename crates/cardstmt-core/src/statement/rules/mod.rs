//! Rule-based field extraction for card statements.

pub mod amounts;
pub mod patterns;

pub use amounts::{format_rupees, parse_amount, AmountRange, CURRENCY_SYMBOL};

use regex::{Captures, Regex};
use tracing::trace;

use crate::models::statement::{ExtractedField, Issuer};

use super::profiles::profile;

/// Logical statement fields extracted by pattern rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementField {
    CardNumber,
    BillingCycle,
    DueDate,
    TotalBalance,
}

impl StatementField {
    pub const ALL: [StatementField; 4] = [
        StatementField::CardNumber,
        StatementField::BillingCycle,
        StatementField::DueDate,
        StatementField::TotalBalance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StatementField::CardNumber => "cardNumber",
            StatementField::BillingCycle => "billingCycle",
            StatementField::DueDate => "dueDate",
            StatementField::TotalBalance => "totalBalance",
        }
    }
}

/// How the captures of a matched pattern become a field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolve {
    /// Capture group verbatim.
    Group(usize),
    /// Capture group left-padded with zeros to `width` characters.
    ZeroPadded { group: usize, width: usize },
    /// Concatenation of the groups `first..=last`.
    Concat { first: usize, last: usize },
    /// Two groups rendered as "<start> to <end>".
    Span { start: usize, end: usize },
    /// Capture group parsed as an amount, range-checked and formatted.
    Amount { group: usize, range: AmountRange },
}

impl Resolve {
    /// Produce the field value, or `None` when the captures are rejected.
    pub fn apply(&self, caps: &Captures<'_>) -> Option<String> {
        match *self {
            Resolve::Group(group) => caps.get(group).map(|m| m.as_str().to_string()),
            Resolve::ZeroPadded { group, width } => {
                let digits = caps.get(group)?.as_str();
                Some(format!("{:0>width$}", digits, width = width))
            }
            Resolve::Concat { first, last } => (first..=last)
                .map(|i| caps.get(i).map(|m| m.as_str()))
                .collect::<Option<String>>(),
            Resolve::Span { start, end } => Some(format!(
                "{} to {}",
                caps.get(start)?.as_str(),
                caps.get(end)?.as_str()
            )),
            Resolve::Amount { group, range } => {
                let raw = caps.get(group)?.as_str();
                let amount = parse_amount(raw)?;
                if !range.contains(amount) {
                    trace!("Amount {} outside accepted range", amount);
                    return None;
                }
                Some(format_rupees(amount))
            }
        }
    }
}

/// A pattern paired with the post-processor for its captures.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub pattern: &'static Regex,
    pub resolve: Resolve,
}

impl FieldRule {
    pub fn new(pattern: &'static Regex, resolve: Resolve) -> Self {
        Self { pattern, resolve }
    }
}

/// Try `rules` in order against `text`; the first rule whose first match is
/// accepted by `accept` wins. Later rules are never tried.
pub fn first_match<T>(
    text: &str,
    rules: &[FieldRule],
    mut accept: impl FnMut(&FieldRule, &Captures<'_>) -> Option<T>,
) -> Option<T> {
    rules.iter().enumerate().find_map(|(index, rule)| {
        let caps = rule.pattern.captures(text)?;
        let value = accept(rule, &caps);
        if value.is_none() {
            trace!("Pattern #{} matched but was rejected", index);
        }
        value
    })
}

/// Extract one field of an issuer's statement, degrading to "Not found".
pub fn extract_field(field: StatementField, text: &str, issuer: Issuer) -> ExtractedField {
    let rules = profile(issuer).rules(field);
    first_match(text, rules, |rule, caps| rule.resolve.apply(caps)).into()
}
