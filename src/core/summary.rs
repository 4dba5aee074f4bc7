//! Roll line items up into an invoice summary under BOS or BOP rules.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::tax::{line_netto, line_ppn, line_pph};
use super::types::{FundSource, InvoiceSummary, LineItem};

/// Administration rules of a funding program.
///
/// BOS splits the 5% administration into a 4% and a 1% share and adds PPN
/// back into the netto. BOP deducts a flat 5% and subtracts PPN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fund", rename_all = "UPPERCASE")]
pub enum FundSourceRules {
    Bos {
        four_percent: Decimal,
        one_percent: Decimal,
    },
    Bop {
        flat: Decimal,
    },
}

impl FundSourceRules {
    /// Standard BOS rules (4% + 1%).
    pub const BOS: Self = Self::Bos {
        four_percent: dec!(0.04),
        one_percent: dec!(0.01),
    };

    /// Standard BOP rules (flat 5%).
    pub const BOP: Self = Self::Bop { flat: dec!(0.05) };

    /// The fund source these rules belong to.
    pub fn fund_source(&self) -> FundSource {
        match self {
            Self::Bos { .. } => FundSource::Bos,
            Self::Bop { .. } => FundSource::Bop,
        }
    }
}

impl FundSource {
    /// Standard administration rules for this program.
    pub fn rules(&self) -> FundSourceRules {
        match self {
            Self::Bos => FundSourceRules::BOS,
            Self::Bop => FundSourceRules::BOP,
        }
    }
}

/// Aggregate line items into an [`InvoiceSummary`] under the standard rules
/// of `fund`.
///
/// Taxes are summed per item, so `ppn`/`pph` flags are honoured item by item.
/// An empty list yields an all-zero summary.
///
/// ```
/// use faktur::core::*;
/// use rust_decimal_macros::dec;
///
/// let summary = compute_summary(&[], FundSource::Bos);
/// assert_eq!(summary.total, dec!(0));
/// assert_eq!(summary.admin_four_percent, Some(dec!(0)));
/// ```
pub fn compute_summary(items: &[LineItem], fund: FundSource) -> InvoiceSummary {
    compute_summary_with(items, &fund.rules())
}

/// Aggregate line items into an [`InvoiceSummary`] under explicit rules.
pub fn compute_summary_with(items: &[LineItem], rules: &FundSourceRules) -> InvoiceSummary {
    let subtotal = saturating_sum(items.iter().map(|i| i.total_price));
    let total_ppn = saturating_sum(items.iter().map(line_ppn));
    let total_pph = saturating_sum(items.iter().map(line_pph));

    match *rules {
        FundSourceRules::Bos {
            four_percent,
            one_percent,
        } => {
            let total_netto = subtotal.saturating_add(total_ppn).saturating_sub(total_pph);
            let admin_four = total_netto.saturating_mul(four_percent);
            let admin_one = total_netto.saturating_mul(one_percent);
            let administration = admin_four.saturating_add(admin_one);
            let sekolah_amount = total_netto.saturating_sub(administration);
            InvoiceSummary {
                subtotal,
                total_ppn,
                total_pph,
                total_netto,
                administration,
                admin_four_percent: Some(admin_four),
                admin_one_percent: Some(admin_one),
                sekolah_amount,
                total: sekolah_amount,
            }
        }
        FundSourceRules::Bop { flat } => {
            let total_netto = subtotal.saturating_sub(total_ppn).saturating_sub(total_pph);
            let administration = total_netto.saturating_mul(flat);
            let sekolah_amount = total_netto.saturating_sub(administration);
            InvoiceSummary {
                subtotal,
                total_ppn,
                total_pph,
                total_netto,
                administration,
                admin_four_percent: None,
                admin_one_percent: None,
                sekolah_amount,
                total: sekolah_amount,
            }
        }
    }
}

/// Re-derive the entered-vs-derived price and netto of every item, then
/// aggregate.
///
/// BOS derives `total_price = quantity × unit_price`; BOP derives
/// `unit_price = total_price / quantity` (zero when `quantity ≤ 0`).
pub fn recalculate_items(items: &mut [LineItem], fund: FundSource) -> InvoiceSummary {
    for item in items.iter_mut() {
        reprice(item, fund);
    }
    compute_summary(items, fund)
}

/// Amounts past `Decimal::MAX` saturate instead of panicking; validation
/// rejects anything above [`MAX_AMOUNT`](super::validation::MAX_AMOUNT).
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

pub(crate) fn reprice(item: &mut LineItem, fund: FundSource) {
    match fund {
        FundSource::Bos => {
            item.total_price = Decimal::from(item.quantity).saturating_mul(item.unit_price);
        }
        FundSource::Bop => {
            item.unit_price = if item.quantity <= 0 {
                Decimal::ZERO
            } else {
                item.total_price / Decimal::from(item.quantity)
            };
        }
    }
    item.netto = line_netto(item, fund);
}
