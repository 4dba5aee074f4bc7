//! Rupiah display formatting.
//!
//! Amounts are stored with full precision; rounding to whole Rupiah happens
//! here and only here.

use num_format::{Locale, ToFormattedString};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to whole Rupiah, half away from zero.
pub fn round_rupiah(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as Indonesian Rupiah: `Rp 1.500.000`.
///
/// Zero decimal places, `.` as thousands separator; negative amounts are
/// written `-Rp 1.500`.
///
/// ```
/// use faktur::core::format_rupiah;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(format_rupiah(dec!(1500000)), "Rp 1.500.000");
/// assert_eq!(format_rupiah(dec!(949.5)), "Rp 950");
/// ```
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = round_rupiah(amount);
    // Any rounded Decimal fits in an i128.
    let whole = rounded.abs().to_i128().unwrap_or_default();
    let grouped = whole.to_formatted_string(&Locale::id);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-Rp {grouped}")
    } else {
        format!("Rp {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_rupiah(dec!(0)), "Rp 0");
        assert_eq!(format_rupiah(dec!(999)), "Rp 999");
        assert_eq!(format_rupiah(dec!(1000)), "Rp 1.000");
        assert_eq!(format_rupiah(dec!(12345678)), "Rp 12.345.678");
    }

    #[test]
    fn rounds_to_whole_rupiah() {
        assert_eq!(format_rupiah(dec!(1499.49)), "Rp 1.499");
        assert_eq!(format_rupiah(dec!(1499.5)), "Rp 1.500");
        assert_eq!(format_rupiah(dec!(9.909909909909909909909909909)), "Rp 10");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_rupiah(dec!(-1500)), "-Rp 1.500");
        assert_eq!(format_rupiah(dec!(-0.4)), "Rp 0");
    }

    #[test]
    fn formatting_does_not_touch_stored_value() {
        let amount = dec!(1234.5678);
        let _ = format_rupiah(amount);
        assert_eq!(amount, dec!(1234.5678));
    }
}
