//! Formatted terminal output.
//!
//! Formatting lives here so the search code stays free of presentation and the
//! exact report text can be pinned by tests.

use crate::domain::{CuriousPair, Product};
use crate::error::AppError;
use crate::report::ReportFile;

/// Format the text report: the product on its own line, then the fractions and
/// the reduced denominator.
pub fn format_report(pairs: &[CuriousPair], product: &Product) -> String {
    let mut out = String::new();

    out.push_str(&format!("{product}\n"));
    out.push_str("All non-trivial, double-digit, curious fractions:\n");
    for pair in pairs {
        out.push_str(&format!("  {}\n", pair.fraction));
    }
    out.push_str("Least-common-denominator of their product:\n");
    out.push_str(&format!("  {}", product.denominator()));

    out
}

/// Format the JSON report (pretty-printed).
pub fn format_json(pairs: &[CuriousPair], product: &Product) -> Result<String, AppError> {
    let report = ReportFile::new(pairs, product);
    serde_json::to_string_pretty(&report)
        .map_err(|e| AppError::new(4, format!("Failed to serialize JSON report: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Fraction;
    use crate::math::product_of;

    fn pair(n: u32, d: u32, digit: u8, rn: u32, rd: u32) -> CuriousPair {
        CuriousPair {
            fraction: Fraction::new(n, d),
            cancelled_digit: digit,
            reduced: Fraction::new(rn, rd),
        }
    }

    fn known_pairs() -> Vec<CuriousPair> {
        vec![
            pair(16, 64, 6, 1, 4),
            pair(26, 65, 6, 2, 5),
            pair(19, 95, 9, 1, 5),
            pair(49, 98, 9, 4, 8),
        ]
    }

    #[test]
    fn text_report_matches_expected_layout() {
        let pairs = known_pairs();
        let fractions: Vec<Fraction> = pairs.iter().map(|p| p.fraction).collect();
        let product = product_of(&fractions).unwrap();

        let expected = "\
1/100
All non-trivial, double-digit, curious fractions:
  16 / 64
  26 / 65
  19 / 95
  49 / 98
Least-common-denominator of their product:
  100";
        assert_eq!(format_report(&pairs, &product), expected);
    }

    #[test]
    fn json_report_carries_pairs_and_product() {
        let pairs = known_pairs();
        let fractions: Vec<Fraction> = pairs.iter().map(|p| p.fraction).collect();
        let product = product_of(&fractions).unwrap();

        let json = format_json(&pairs, &product).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["product"], "1/100");
        assert_eq!(value["denominator"], "100");
        assert_eq!(value["fractions"].as_array().unwrap().len(), 4);
        assert_eq!(value["fractions"][0]["numerator"], 16);
        assert_eq!(value["fractions"][0]["denominator"], 64);
        assert_eq!(value["fractions"][0]["cancelled_digit"], 6);
        assert_eq!(value["fractions"][0]["reduced"]["denominator"], 4);
    }
}
