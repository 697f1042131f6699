//! Amount parsing, range checks and rupee formatting.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Currency symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Inclusive or exclusive numeric range used to validate amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountRange {
    pub min: Decimal,
    pub max: Decimal,
    /// Whether the bounds themselves are accepted.
    pub inclusive: bool,
}

impl AmountRange {
    /// Range accepting `min <= x <= max`.
    pub const fn inclusive(min: Decimal, max: Decimal) -> Self {
        Self { min, max, inclusive: true }
    }

    /// Range accepting `min < x < max`.
    pub const fn exclusive(min: Decimal, max: Decimal) -> Self {
        Self { min, max, inclusive: false }
    }

    pub fn contains(&self, amount: Decimal) -> bool {
        if self.inclusive {
            amount >= self.min && amount <= self.max
        } else {
            amount > self.min && amount < self.max
        }
    }
}

/// Parse a statement amount such as "12,345.67" or "1999." into a decimal.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace(',', "");
    let cleaned = cleaned.strip_suffix('.').unwrap_or(&cleaned);

    if cleaned.is_empty() {
        return None;
    }

    Decimal::from_str(cleaned).ok()
}

/// Format amount with the rupee symbol, comma grouping and two decimals
/// (₹1,234.56).
pub fn format_rupees(amount: Decimal) -> String {
    let s = format!("{:.2}", amount.round_dp(2));
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some(parts) => parts,
        None => return format!("{}{}", CURRENCY_SYMBOL, s),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Add thousand separators
    let chars: Vec<char> = digits.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12,345.67"), Some(dec("12345.67")));
        assert_eq!(parse_amount("1999"), Some(dec("1999")));
        assert_eq!(parse_amount("1999."), Some(dec("1999")));
        assert_eq!(parse_amount("1,00,000.5"), Some(dec("100000.5")));
        assert_eq!(parse_amount(",,"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(dec("12345.67")), "₹12,345.67");
        assert_eq!(format_rupees(dec("1999")), "₹1,999.00");
        assert_eq!(format_rupees(dec("0.5")), "₹0.50");
        assert_eq!(format_rupees(dec("999")), "₹999.00");
        assert_eq!(format_rupees(dec("99999999.99")), "₹99,999,999.99");
        assert_eq!(format_rupees(dec("100000000")), "₹100,000,000.00");
    }

    #[test]
    fn test_range_bounds() {
        let open = AmountRange::exclusive(dec("0.01"), dec("10000000"));
        assert!(!open.contains(dec("0.01")));
        assert!(open.contains(dec("0.02")));
        assert!(open.contains(dec("9999999.99")));
        assert!(!open.contains(dec("10000000")));

        let closed = AmountRange::inclusive(Decimal::ONE, dec("100000000"));
        assert!(closed.contains(Decimal::ONE));
        assert!(closed.contains(dec("100000000")));
        assert!(!closed.contains(dec("0.99")));
        assert!(!closed.contains(dec("100000001")));
    }
}
