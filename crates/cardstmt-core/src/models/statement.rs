//! Credit-card statement data models.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder emitted for any field that could not be extracted.
pub const NOT_FOUND: &str = "Not found";

/// Card issuer whose statement layout is recognized.
///
/// Variant order is the detection precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Issuer {
    #[serde(rename = "HDFC Bank")]
    Hdfc,
    #[serde(rename = "ICICI Bank")]
    Icici,
    #[serde(rename = "SBI Card")]
    SbiCard,
    #[serde(rename = "Axis Bank")]
    Axis,
    #[serde(rename = "Kotak Mahindra Bank")]
    Kotak,
}

impl Issuer {
    /// All supported issuers in detection precedence order.
    pub const ALL: [Issuer; 5] = [
        Issuer::Hdfc,
        Issuer::Icici,
        Issuer::SbiCard,
        Issuer::Axis,
        Issuer::Kotak,
    ];

    /// Full display name, as reported in parse results.
    pub fn name(&self) -> &'static str {
        match self {
            Issuer::Hdfc => "HDFC Bank",
            Issuer::Icici => "ICICI Bank",
            Issuer::SbiCard => "SBI Card",
            Issuer::Axis => "Axis Bank",
            Issuer::Kotak => "Kotak Mahindra Bank",
        }
    }

    /// Short name used in user-facing messages.
    pub fn short_name(&self) -> &'static str {
        match self {
            Issuer::Hdfc => "HDFC",
            Issuer::Icici => "ICICI",
            Issuer::SbiCard => "SBI Card",
            Issuer::Axis => "Axis",
            Issuer::Kotak => "Kotak Mahindra",
        }
    }

    /// Look up an issuer by its display name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|issuer| issuer.name().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Issuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of all supported issuers, in precedence order.
pub fn supported_issuers() -> Vec<&'static str> {
    Issuer::ALL.iter().map(Issuer::name).collect()
}

/// A single extracted field: either a formatted value or "Not found".
///
/// Serializes as a plain string so the sentinel is visible to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExtractedField {
    /// Successfully extracted and formatted value.
    Value(String),
    /// Extraction degraded to the sentinel.
    #[default]
    NotFound,
}

impl ExtractedField {
    pub fn is_found(&self) -> bool {
        matches!(self, ExtractedField::Value(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ExtractedField::Value(v) => v,
            ExtractedField::NotFound => NOT_FOUND,
        }
    }

    /// The extracted value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            ExtractedField::Value(v) => Some(v),
            ExtractedField::NotFound => None,
        }
    }
}

impl From<Option<String>> for ExtractedField {
    fn from(value: Option<String>) -> Self {
        value.map_or(ExtractedField::NotFound, ExtractedField::Value)
    }
}

impl From<String> for ExtractedField {
    fn from(value: String) -> Self {
        if value == NOT_FOUND {
            ExtractedField::NotFound
        } else {
            ExtractedField::Value(value)
        }
    }
}

impl From<ExtractedField> for String {
    fn from(field: ExtractedField) -> Self {
        match field {
            ExtractedField::Value(v) => v,
            ExtractedField::NotFound => NOT_FOUND.to_string(),
        }
    }
}

impl fmt::Display for ExtractedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the statement's transaction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Date as printed in the statement (DD/MM/YYYY).
    pub date: String,

    /// Normalized description, at most 80 characters.
    pub description: String,

    /// Formatted amount including any issuer-specific flow marker.
    pub amount: String,
}

/// Structured data extracted from one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedStatement {
    /// Detected issuer.
    pub issuer: Issuer,

    /// Last four digits of the card number.
    pub card_number: ExtractedField,

    /// Statement date or "<start> to <end>" range.
    pub billing_cycle: ExtractedField,

    /// Payment due date.
    pub due_date: ExtractedField,

    /// Total amount due, formatted with the currency symbol.
    pub total_balance: ExtractedField,

    /// Leading transactions in document order.
    pub transactions: Vec<Transaction>,
}

impl ParsedStatement {
    /// Names of the fields that degraded to "Not found".
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("cardNumber", &self.card_number),
            ("billingCycle", &self.billing_cycle),
            ("dueDate", &self.due_date),
            ("totalBalance", &self.total_balance),
        ];

        let mut missing: Vec<&'static str> = fields
            .into_iter()
            .filter(|(_, field)| !field.is_found())
            .map(|(name, _)| name)
            .collect();

        if self.transactions.is_empty() {
            missing.push("transactions");
        }

        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> ParsedStatement {
        ParsedStatement {
            issuer: Issuer::Hdfc,
            card_number: ExtractedField::Value("1234".to_string()),
            billing_cycle: ExtractedField::NotFound,
            due_date: ExtractedField::Value("15/03/2024".to_string()),
            total_balance: ExtractedField::Value("₹12,345.67".to_string()),
            transactions: vec![],
        }
    }

    #[test]
    fn test_serializes_camel_case_with_sentinel() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["issuer"], "HDFC Bank");
        assert_eq!(json["cardNumber"], "1234");
        assert_eq!(json["billingCycle"], "Not found");
        assert_eq!(json["totalBalance"], "₹12,345.67");
        assert!(json["transactions"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_deserialize_restores_sentinel() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: ParsedStatement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
        assert_eq!(back.billing_cycle, ExtractedField::NotFound);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(sample().missing_fields(), vec!["billingCycle", "transactions"]);
    }

    #[test]
    fn test_issuer_names() {
        assert_eq!(
            supported_issuers(),
            vec!["HDFC Bank", "ICICI Bank", "SBI Card", "Axis Bank", "Kotak Mahindra Bank"]
        );
        assert_eq!(Issuer::from_name("axis bank"), Some(Issuer::Axis));
        assert_eq!(Issuer::from_name("Citi"), None);
    }
}
