//! Issuer detection.

use tracing::debug;

use crate::models::statement::Issuer;

use super::profiles::PROFILES;

/// Classifies statement text by issuer signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct IssuerDetector;

impl IssuerDetector {
    pub fn new() -> Self {
        Self
    }

    /// Return the first issuer, in precedence order, with a signature
    /// anywhere in `text`. Position in the text does not matter.
    pub fn detect(&self, text: &str) -> Option<Issuer> {
        let upper = text.to_uppercase();
        let issuer = PROFILES
            .iter()
            .find(|profile| profile.matches_upper(&upper))
            .map(|profile| profile.issuer);

        debug!("Detected issuer: {:?}", issuer);
        issuer
    }
}

/// Detect the issuer of a statement.
pub fn detect_issuer(text: &str) -> Option<Issuer> {
    IssuerDetector::new().detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_issuer_signatures() {
        let cases = [
            ("Thank you for banking with HDFC Bank Ltd", Issuer::Hdfc),
            ("www.hdfcbank.com", Issuer::Hdfc),
            ("ICICI Bank Credit Card Statement", Issuer::Icici),
            ("customer.care@icicibank.com", Issuer::Icici),
            ("SBI Card Statement", Issuer::SbiCard),
            ("State Bank of India", Issuer::SbiCard),
            ("Axis Bank Ltd", Issuer::Axis),
            ("www.axisbank.com", Issuer::Axis),
            ("Kotak Mahindra Bank", Issuer::Kotak),
        ];

        for (text, expected) in cases {
            assert_eq!(detect_issuer(text), Some(expected), "text: {}", text);
        }
    }

    #[test]
    fn test_precedence_ignores_position() {
        // Axis is mentioned first, but ICICI outranks it.
        let text = "Paid via AXIS BANK gateway\n...\nICICI BANK statement";
        assert_eq!(detect_issuer(text), Some(Issuer::Icici));

        let text = "KOTAK transfer\nHDFC BANK";
        assert_eq!(detect_issuer(text), Some(Issuer::Hdfc));

        let text = "kotak refund credited\nstate bank atm";
        assert_eq!(detect_issuer(text), Some(Issuer::SbiCard));
    }

    #[test]
    fn test_every_pair_resolves_to_higher_precedence() {
        let samples = [
            (Issuer::Hdfc, "HDFC BANK"),
            (Issuer::Icici, "ICICI BANK"),
            (Issuer::SbiCard, "SBI CARD"),
            (Issuer::Axis, "AXIS BANK"),
            (Issuer::Kotak, "KOTAK"),
        ];

        for (i, (higher, higher_sig)) in samples.iter().enumerate() {
            for (_, lower_sig) in samples.iter().skip(i + 1) {
                let text = format!("{}\n{}", lower_sig, higher_sig);
                assert_eq!(detect_issuer(&text), Some(*higher));
            }
        }
    }

    #[test]
    fn test_unknown_issuer() {
        assert_eq!(detect_issuer(""), None);
        assert_eq!(detect_issuer("Citibank statement\nHDFC"), None);
    }
}
