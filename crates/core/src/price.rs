//! Visitor-facing price rendering.
//!
//! A plot's owner chooses how its price appears on the site:
//!
//! | Mode     | Output for 2 500 000        |
//! |----------|-----------------------------|
//! | `exact`  | `₹25,00,000`                |
//! | `masked` | `₹xx00000`                  |
//! | `hidden` | `Contact for Price` (per language) |
//!
//! Masking keeps only the trailing zeros so the order of magnitude is
//! visible while the significant digits are not.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::language::Language;
use crate::status::PriceDisplay;

/// Currency symbol prefixed to every rendered price.
pub const RUPEE: char = '₹';

/// Render `price` according to the plot's display preferences.
///
/// `hidden` wins over everything; `show_price = false` also hides the
/// price regardless of mode.
pub fn display_price(
    price: Decimal,
    mode: PriceDisplay,
    show_price: bool,
    lang: Language,
) -> String {
    if mode == PriceDisplay::Hidden || !show_price {
        return lang.contact_for_price().to_string();
    }
    match mode {
        PriceDisplay::Masked => mask_price(price),
        _ => format_inr(price),
    }
}

/// Mask every significant digit of the integer part of `price` with `x`,
/// keeping the trailing zeros.
///
/// `2500000` splits into the significant prefix `25` and the suffix
/// `00000`, giving `₹xx00000`. A zero price has an empty prefix and
/// renders as `₹0`.
pub fn mask_price(price: Decimal) -> String {
    let digits = integer_digits(price.trunc());
    let significant = digits.trim_end_matches('0').len();
    let zeros = digits.len() - significant;

    let mut out = String::with_capacity(1 + digits.len());
    out.push(RUPEE);
    out.extend(std::iter::repeat('x').take(significant));
    out.extend(std::iter::repeat('0').take(zeros));
    out
}

/// Format `price` as Indian rupees with lakh/crore digit grouping and no
/// fraction (`1234567.5` → `₹12,34,568`).
pub fn format_inr(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = integer_digits(rounded);
    let grouped = group_indian(&digits);

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{RUPEE}{grouped}")
    } else {
        format!("{RUPEE}{grouped}")
    }
}

/// Decimal digits of the absolute integer value of an already-integral decimal.
fn integer_digits(value: Decimal) -> String {
    value.abs().to_u128().unwrap_or_default().to_string()
}

/// Group the last three digits, then every two digits to the left.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn masks_significant_digits_and_keeps_zeros() {
        assert_eq!(mask_price(dec("2500000")), "₹xx00000");
        assert_eq!(mask_price(dec("1850000.00")), "₹xxx0000");
        assert_eq!(mask_price(dec("1234567")), "₹xxxxxxx");
        assert_eq!(mask_price(dec("1000000")), "₹x000000");
    }

    #[test]
    fn mask_ignores_fractional_part() {
        assert_eq!(mask_price(dec("2500000.99")), "₹xx00000");
        assert_eq!(mask_price(dec("999.50")), "₹xxx");
    }

    #[test]
    fn zero_price_has_empty_mask() {
        assert_eq!(mask_price(Decimal::ZERO), "₹0");
        assert_eq!(mask_price(dec("0.75")), "₹0");
    }

    #[test]
    fn mask_has_one_x_per_significant_digit() {
        for (price, s, z) in [(7u64, 1, 0), (70, 1, 1), (7070, 3, 1), (45_000_000, 2, 6)] {
            let masked = mask_price(Decimal::from(price));
            let body = masked.strip_prefix(RUPEE).unwrap();
            assert_eq!(body, format!("{}{}", "x".repeat(s), "0".repeat(z)));
        }
    }

    #[test]
    fn formats_with_indian_grouping() {
        assert_eq!(format_inr(dec("0")), "₹0");
        assert_eq!(format_inr(dec("999")), "₹999");
        assert_eq!(format_inr(dec("1000")), "₹1,000");
        assert_eq!(format_inr(dec("100000")), "₹1,00,000");
        assert_eq!(format_inr(dec("2500000.00")), "₹25,00,000");
        assert_eq!(format_inr(dec("123456789")), "₹12,34,56,789");
    }

    #[test]
    fn exact_rounds_half_away_from_zero() {
        assert_eq!(format_inr(dec("1234567.5")), "₹12,34,568");
        assert_eq!(format_inr(dec("1234567.49")), "₹12,34,567");
    }

    #[test]
    fn hidden_always_yields_contact_string() {
        for show_price in [true, false] {
            for price in [Decimal::ZERO, dec("2500000")] {
                assert_eq!(
                    display_price(price, PriceDisplay::Hidden, show_price, Language::En),
                    "Contact for Price"
                );
            }
        }
        assert_eq!(
            display_price(dec("1"), PriceDisplay::Hidden, true, Language::Hi),
            Language::Hi.contact_for_price()
        );
    }

    #[test]
    fn show_price_false_hides_other_modes() {
        assert_eq!(
            display_price(dec("2500000"), PriceDisplay::Exact, false, Language::En),
            "Contact for Price"
        );
        assert_eq!(
            display_price(dec("2500000"), PriceDisplay::Masked, false, Language::En),
            "Contact for Price"
        );
    }

    #[test]
    fn display_dispatches_on_mode() {
        let price = dec("2500000");
        assert_eq!(
            display_price(price, PriceDisplay::Exact, true, Language::En),
            "₹25,00,000"
        );
        assert_eq!(
            display_price(price, PriceDisplay::Masked, true, Language::En),
            "₹xx00000"
        );
    }
}
