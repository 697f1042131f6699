//! Regex patterns for Indian credit-card statement extraction.
//!
//! Patterns are grouped by issuer and field; order inside a field is the
//! order in which they are tried.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Shared normalization
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // HDFC Bank: card number
    pub static ref HDFC_CARD_MASKED: Regex = Regex::new(
        r"(?i)Card No[:\s]*(\d{4})\s+(\d{2})XX\s+XXXX\s+(\d{4})"
    ).unwrap();

    pub static ref HDFC_CARD_SPACED: Regex = Regex::new(
        r"(?i)(\d)\s+(\d)\s+(\d)\s+(\d)\s+(\d)\s+(\d)\s+(\d)\s+(\d)\s+X+\s+X+\s+(\d)\s+(\d)\s+(\d)\s+(\d)"
    ).unwrap();

    // HDFC Bank: billing cycle (statement date)
    pub static ref HDFC_STATEMENT_DATE: Regex = Regex::new(
        r"(?i)Statement Date[:\s]*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref HDFC_STATEMENT_FOR: Regex = Regex::new(
        r"(?i)Statement for.*?(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // HDFC Bank: due date
    pub static ref HDFC_DUE_DATE_HEADER: Regex = Regex::new(
        r"(?i)Payment Due Date\s+Total Dues\s+Minimum Amount Due\s*\n\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref HDFC_DUE_DATE_LABELED: Regex = Regex::new(
        r"(?i)Payment Due Date[:\s]*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // HDFC Bank: total dues
    pub static ref HDFC_TOTAL_HEADER: Regex = Regex::new(
        r"(?i)Payment Due Date\s+Total Dues\s+Minimum Amount Due\s*\n\s*\d{2}/\d{2}/\d{4}\s+([\d,]+\.?\d{0,2})"
    ).unwrap();

    pub static ref HDFC_TOTAL_NEXT_LINE: Regex = Regex::new(
        r"(?i)Total Dues\s*\n\s*([\d,]+\.?\d{0,2})"
    ).unwrap();

    pub static ref HDFC_TOTAL_LABELED: Regex = Regex::new(
        r"(?i)Total Dues[:\s]+([\d,]+\.?\d{0,2})"
    ).unwrap();

    // HDFC Bank: transaction table
    pub static ref HDFC_TABLE_HEADER: Regex = Regex::new(
        r"(?i)Domestic Transactions|Date\s+Transaction Description"
    ).unwrap();

    pub static ref HDFC_END_REWARDS: Regex = Regex::new(r"(?i)Reward Points").unwrap();
    pub static ref HDFC_END_INTERNATIONAL: Regex = Regex::new(r"(?i)International Transactions").unwrap();
    pub static ref HDFC_END_FOOTER: Regex = Regex::new(r"(?i)For HDFC Bank").unwrap();
    pub static ref HDFC_END_PAGE: Regex = Regex::new(r"(?i)Page \d+").unwrap();

    pub static ref HDFC_ROW: Regex = Regex::new(
        r"^(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<desc>.+?)\s+(?P<amount>[\d,]+\.?\d{0,2})(?P<flow>\s+Cr)?$"
    ).unwrap();

    pub static ref HDFC_REFERENCE: Regex = Regex::new(r"\(Ref#[^)]+\)").unwrap();

    // Axis Bank: card number
    pub static ref AXIS_CARD_MASKED: Regex = Regex::new(
        r"(?i)(\d{6})\*{6}(\d{4})"
    ).unwrap();

    pub static ref AXIS_CARD_LABELED: Regex = Regex::new(
        r"(?i)Card No[.:\s]*(\d{6})\*{6}(\d{4})"
    ).unwrap();

    // Axis Bank: billing cycle
    pub static ref AXIS_PERIOD_HEADER: Regex = Regex::new(
        r"(?i)Statement Period\s+Payment Due Date[^\n]*\n\s*(\d{2}/\d{2}/\d{4})\s*-\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref AXIS_PERIOD_LABELED: Regex = Regex::new(
        r"(?i)Statement Period[:\s]+(\d{2}/\d{2}/\d{4})\s*-\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Axis Bank: due date
    pub static ref AXIS_DUE_DATE_HEADER: Regex = Regex::new(
        r"(?i)Statement Period\s+Payment Due Date\s+Statement Generation Date\s*\n\s*\d{2}/\d{2}/\d{4}\s*-\s*\d{2}/\d{2}/\d{4}\s+(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    pub static ref AXIS_DUE_DATE_LABELED: Regex = Regex::new(
        r"(?i)Payment Due Date[:\s]+(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // Axis Bank: total payment due
    pub static ref AXIS_TOTAL_HEADER: Regex = Regex::new(
        r"(?i)Total Payment Due\s+Minimum Payment Due\s+Statement Period[^\n]*\n\s*([\d,]+\.?\d{0,2})\s+Dr"
    ).unwrap();

    pub static ref AXIS_TOTAL_LABELED: Regex = Regex::new(
        r"(?i)Total Payment Due[:\s]+([\d,]+\.?\d{0,2})\s+Dr"
    ).unwrap();

    pub static ref AXIS_TOTAL_SUMMARY: Regex = Regex::new(
        r"(?i)=\s*Total Payment Due\s*\n[^\d]*([\d,]+\.?\d{0,2})\s+Dr"
    ).unwrap();

    // Axis Bank: transaction table
    pub static ref AXIS_TABLE_HEADER: Regex = Regex::new(
        r"(?i)DATE\s+TRANSACTION DETAILS\s+MERCHANT CATEGORY\s+AMOUNT"
    ).unwrap();

    pub static ref AXIS_END_STATEMENT: Regex = Regex::new(r"(?i)\*{3,}\s*End of Statement").unwrap();
    pub static ref AXIS_END_EMI: Regex = Regex::new(r"(?i)EMI BALANCES").unwrap();
    pub static ref AXIS_END_CONTACT: Regex = Regex::new(r"(?i)CONTACT US").unwrap();

    pub static ref AXIS_ROW: Regex = Regex::new(
        r"^(?P<date>\d{2}/\d{2}/\d{4})\s+(?P<desc>.+?)\s+(?P<amount>[\d,]+\.?\d{0,2})\s+(?P<flow>Dr|Cr)"
    ).unwrap();

    pub static ref AXIS_MERCHANT_CATEGORY: Regex = Regex::new(
        r"(?i)\s+(MISCELLANEOUS|ELECTRONICS|FUEL|Others|ENTERTAINMENT|MOBILE PHONES.*|CLOTH STORES|DEPT STORES|MEDICAL).*$"
    ).unwrap();

    // ICICI Bank: card number
    pub static ref ICICI_CARD_LABELED: Regex = Regex::new(
        r"(?i)Card Number\s*:\s*(\d{4})\s+XXXX\s+XXXX\s+(\d{3,4})"
    ).unwrap();

    pub static ref ICICI_CARD_MASKED: Regex = Regex::new(
        r"(?i)(\d{4})\s+XXXX\s+XXXX\s+(\d{3,4})"
    ).unwrap();

    // ICICI Bank: billing cycle
    pub static ref ICICI_PERIOD: Regex = Regex::new(
        r"(?i)Statement Period\s*:\s*From\s+(\d{2}/\d{2}/\d{4})\s+to\s+(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // ICICI Bank: due date
    pub static ref ICICI_DUE_DATE: Regex = Regex::new(
        r"(?i)Due Date\s*:\s*(\d{2}/\d{2}/\d{4})"
    ).unwrap();

    // ICICI Bank: total amount due (statements render the rupee sign as a backtick)
    pub static ref ICICI_TOTAL_INLINE: Regex = Regex::new(
        r"(?i)Your Total Amount Due\s*[`₹]\s*([\d,]+\.?\d{0,2})"
    ).unwrap();

    pub static ref ICICI_TOTAL_NEXT_LINE: Regex = Regex::new(
        r"(?i)Your Total Amount Due\s*\n\s*[`₹]?\s*([\d,]+\.?\d{0,2})"
    ).unwrap();

    pub static ref ICICI_TOTAL_LABELED: Regex = Regex::new(
        r"(?i)Total Amount Due\s*:\s*[`₹]?\s*([\d,]+\.?\d{0,2})"
    ).unwrap();

    // ICICI Bank: transaction table
    pub static ref ICICI_TABLE_HEADER: Regex = Regex::new(
        r"(?i)Date\s+Ref\.\s*Number\s+Transaction Details"
    ).unwrap();

    pub static ref ICICI_END_PERIOD: Regex = Regex::new(r"(?i)Statement Period").unwrap();
    pub static ref ICICI_END_OFFERS: Regex = Regex::new(r"(?i)Great offers").unwrap();
    pub static ref ICICI_END_SAFE_BANKING: Regex = Regex::new(r"(?i)Safe Banking").unwrap();
    pub static ref ICICI_END_STATE_CODE: Regex = Regex::new(r"(?i)State Code").unwrap();

    pub static ref ICICI_ROW: Regex = Regex::new(
        r"^(?P<date>\d{2}/\d{2}/\d{4})\s+\d+\s+(?P<desc>.+?)\s+(?:IN|[\d.]+)\s+[\d.]+\s+[\d.]+\s+(?P<amount>[\d,]+\.?\d*)\s*(?P<flow>CR)?"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hdfc_row_captures() {
        let caps = HDFC_ROW
            .captures("01/03/2024  AMAZON PURCHASE (Ref#123)  1,999.00")
            .unwrap();
        assert_eq!(&caps["date"], "01/03/2024");
        assert_eq!(&caps["desc"], "AMAZON PURCHASE (Ref#123)");
        assert_eq!(&caps["amount"], "1,999.00");
        assert!(caps.name("flow").is_none());

        let caps = HDFC_ROW.captures("02/03/2024 REFUND FLIPKART 500.00 Cr").unwrap();
        assert_eq!(&caps["amount"], "500.00");
        assert!(caps.name("flow").is_some());

        assert!(HDFC_ROW.captures("02/03/2024 REFUND FLIPKART 500.00 CR").is_none());
    }

    #[test]
    fn test_axis_row_captures() {
        let caps = AXIS_ROW
            .captures("05/02/2024 SWIGGY BANGALORE MISCELLANEOUS 450.00 Dr")
            .unwrap();
        assert_eq!(&caps["desc"], "SWIGGY BANGALORE MISCELLANEOUS");
        assert_eq!(&caps["flow"], "Dr");

        assert!(AXIS_ROW.captures("05/01/2024 SWIGGY BANGALORE 450.00 cr").is_none());
    }

    #[test]
    fn test_icici_row_captures() {
        let caps = ICICI_ROW
            .captures("10/01/2024 11223344556 UBER INDIA SYSTEMS IN 2 0 1,250.00 CR")
            .unwrap();
        assert_eq!(&caps["desc"], "UBER INDIA SYSTEMS");
        assert_eq!(&caps["amount"], "1,250.00");
        assert_eq!(&caps["flow"], "CR");
    }

    #[test]
    fn test_merchant_category_strip() {
        let cleaned = AXIS_MERCHANT_CATEGORY.replace("CROMA MUMBAI ELECTRONICS", "");
        assert_eq!(cleaned, "CROMA MUMBAI");

        let cleaned = AXIS_MERCHANT_CATEGORY.replace("JIO RECHARGE MOBILE PHONES & ACC", "");
        assert_eq!(cleaned, "JIO RECHARGE");
    }

    #[test]
    fn test_hdfc_spaced_card_number() {
        let caps = HDFC_CARD_SPACED
            .captures("4 3 7 5 5 1 0 0 XXXX XXXX 9 8 7 6")
            .unwrap();
        assert_eq!(&caps[9], "9");
        assert_eq!(&caps[12], "6");
    }
}
