//! Decimal-safe money parsing.
//!
//! Bank exports mix decimal commas, thousands dots and stray noise in the
//! same column. Every amount is normalized to an exact two-decimal
//! `Decimal` here; nothing downstream does arithmetic on floats.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of decimal places every amount carries at rest.
pub const MONEY_SCALE: u32 = 2;

/// Round half-up (midpoint away from zero) to two decimals and pin the scale,
/// so `1234` becomes `1234.00`.
pub fn round_money(value: Decimal) -> Decimal {
    let mut out = value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    out.rescale(MONEY_SCALE);
    out
}

/// Zero with the money scale (`0.00`).
pub fn zero() -> Decimal {
    round_money(Decimal::ZERO)
}

/// Parse a free-form amount into a two-decimal value. Never fails:
/// anything unparseable becomes `0.00`.
///
/// Separator policy:
/// - commas are decimal separators (`"1234,56"`);
/// - trailing dots are noise (`"123."`);
/// - with several dots, a last group of 1-2 digits is the fraction and the
///   other dots are thousands separators (`"1.234,56"`, `"1.2.3.4.56"`);
///   a longer last group means every dot is a thousands separator
///   (`"1.234.567"`);
/// - a single dot is an ordinary decimal point (`"1234.567"` rounds to `1234.57`).
pub fn parse_amount(raw: &str) -> Decimal {
    normalize_amount(raw)
        .and_then(|s| Decimal::from_str(&s).ok())
        .map(round_money)
        .unwrap_or_else(zero)
}

fn normalize_amount(raw: &str) -> Option<String> {
    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if compact.is_empty() || compact.eq_ignore_ascii_case("nan") {
        return None;
    }

    let value = compact.trim_end_matches('.');
    if value.matches('.').count() <= 1 {
        return Some(value.to_string());
    }

    let (head, last) = value.rsplit_once('.')?;
    if matches!(last.len(), 1 | 2) {
        Some(format!("{}.{}", head.replace('.', ""), last))
    } else {
        Some(value.replace('.', ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_and_comma_separators() {
        assert_eq!(parse_amount("1234.56"), dec!(1234.56));
        assert_eq!(parse_amount("1234,56"), dec!(1234.56));
        assert_eq!(parse_amount("  -160,89 "), dec!(-160.89));
        assert_eq!(parse_amount("1234"), dec!(1234.00));
        assert_eq!(parse_amount("1234.5"), dec!(1234.50));
    }

    #[test]
    fn test_scale_is_pinned_to_two() {
        assert_eq!(parse_amount("1234").scale(), 2);
        assert_eq!(parse_amount("123.450").scale(), 2);
        assert_eq!(parse_amount("garbage").scale(), 2);
        assert_eq!(parse_amount("1234").to_string(), "1234.00");
    }

    #[test]
    fn test_rounding_is_half_up() {
        assert_eq!(parse_amount("1234.567"), dec!(1234.57));
        assert_eq!(parse_amount("1.995"), dec!(2.00));
        assert_eq!(parse_amount("1.994"), dec!(1.99));
        assert_eq!(parse_amount("1.9950"), dec!(2.00));
        assert_eq!(parse_amount("-0.125"), dec!(-0.13));
    }

    #[test]
    fn test_multiple_dots() {
        assert_eq!(parse_amount("1.2.3.4.56"), dec!(1234.56));
        assert_eq!(parse_amount("123.45.67.89"), dec!(1234567.89));
        assert_eq!(parse_amount("1.234.567"), dec!(1234567.00));
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(parse_amount("1.234,56"), dec!(1234.56));
        assert_eq!(parse_amount("1,234.56"), dec!(1234.56));
        assert_eq!(parse_amount("1.234.567,89"), dec!(1234567.89));
        assert_eq!(parse_amount("123.456.789,01"), dec!(123456789.01));
        assert_eq!(parse_amount("1 234,56"), dec!(1234.56));
    }

    #[test]
    fn test_noise_and_empty_values() {
        assert_eq!(parse_amount(""), dec!(0.00));
        assert_eq!(parse_amount("   "), dec!(0.00));
        assert_eq!(parse_amount("NaN"), dec!(0.00));
        assert_eq!(parse_amount("nan"), dec!(0.00));
        assert_eq!(parse_amount("abc"), dec!(0.00));
        assert_eq!(parse_amount("123."), dec!(123.00));
        assert_eq!(parse_amount("123..."), dec!(123.00));
        assert_eq!(parse_amount("..."), dec!(0.00));
        assert_eq!(parse_amount("000.000"), dec!(0.00));
    }

    #[test]
    fn test_reparse_of_rendered_value_is_stable() {
        for raw in ["0.01", "17,30", "-99.99", "1500,00", "123456.78"] {
            let once = parse_amount(raw);
            assert_eq!(parse_amount(&once.to_string()), once, "unstable for {raw}");
            let with_comma = once.to_string().replace('.', ",");
            assert_eq!(parse_amount(&with_comma), once, "unstable for {with_comma}");
        }
    }
}
