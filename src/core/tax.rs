//! PPN and PPh arithmetic.
//!
//! PPN (11%) is always extracted from a tax-inclusive amount. PPh is withheld
//! from the amount left after PPN. Nothing here rounds; rounding happens only
//! when an amount is formatted for display.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::{FundSource, LineItem};

/// PPN rate in percent.
pub const PPN_RATE: Decimal = dec!(11);

/// PPN contained in an 11%-inclusive `total`: `total − total / 1.11`.
///
/// Dividing first keeps the intermediate no larger than `total`, so any
/// representable amount is accepted.
///
/// ```
/// use faktur::core::calculate_ppn;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(calculate_ppn(dec!(111)), dec!(11));
/// ```
pub fn calculate_ppn(total: Decimal) -> Decimal {
    total - total / (Decimal::ONE + PPN_RATE / dec!(100))
}

/// PPh withheld on `total`: `(total − ppn_amount) × pph_percent / 100`.
pub fn calculate_pph(total: Decimal, ppn_amount: Decimal, pph_percent: Decimal) -> Decimal {
    if pph_percent.is_zero() {
        return Decimal::ZERO;
    }
    total
        .saturating_sub(ppn_amount)
        .saturating_mul(pph_percent / dec!(100))
}

/// PPN of a line item, zero unless the item is flagged `ppn`.
pub fn line_ppn(item: &LineItem) -> Decimal {
    if item.ppn {
        calculate_ppn(item.total_price)
    } else {
        Decimal::ZERO
    }
}

/// PPh of a line item, zero unless the item is flagged `pph` with a rate.
pub fn line_pph(item: &LineItem) -> Decimal {
    match (item.pph, item.pph_percentage) {
        (true, Some(rate)) => calculate_pph(item.total_price, line_ppn(item), rate.percent()),
        _ => Decimal::ZERO,
    }
}

/// Netto of a line item.
///
/// BOS adds the PPN back onto the price; BOP treats the price as
/// PPN-inclusive and subtracts it.
pub fn line_netto(item: &LineItem, fund: FundSource) -> Decimal {
    let ppn = line_ppn(item);
    let pph = line_pph(item);
    match fund {
        FundSource::Bos => item.total_price.saturating_add(ppn).saturating_sub(pph),
        FundSource::Bop => item.total_price.saturating_sub(ppn).saturating_sub(pph),
    }
}
