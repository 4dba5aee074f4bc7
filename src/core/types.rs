use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::FakturError;
use super::summary;

/// Government funding program an invoice is charged to.
///
/// The two programs share the same line-item shape but differ in which
/// price the user enters and how PPN enters the netto (see [`FundSourceRules`]).
///
/// [`FundSourceRules`]: super::FundSourceRules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FundSource {
    /// Bantuan Operasional Sekolah.
    #[serde(rename = "BOS", alias = "bos")]
    Bos,
    /// Bantuan Operasional Pendidikan.
    #[serde(rename = "BOP", alias = "bop")]
    Bop,
}

impl FundSource {
    /// Upper-case code as printed on the invoice ("BOS" / "BOP").
    pub fn code(&self) -> &'static str {
        match self {
            Self::Bos => "BOS",
            Self::Bop => "BOP",
        }
    }

    /// Lower-case key used by sequence stores ("bos" / "bop").
    pub fn key(&self) -> &'static str {
        match self {
            Self::Bos => "bos",
            Self::Bop => "bop",
        }
    }
}

impl fmt::Display for FundSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for FundSource {
    type Err = FakturError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "BOS" | "bos" => Ok(Self::Bos),
            "BOP" | "bop" => Ok(Self::Bop),
            other => Err(FakturError::Builder(format!(
                "unknown fund source '{other}' (expected BOS or BOP)"
            ))),
        }
    }
}

/// PPh withholding rate selectable per line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PphRate {
    /// 0.5% (final PPh for small businesses).
    #[serde(rename = "0.5%")]
    HalfPercent,
    /// 1.5% (PPh 22 on goods).
    #[serde(rename = "1.5%")]
    OneAndHalfPercent,
    /// 2% (PPh 23 on services).
    #[serde(rename = "2%")]
    TwoPercent,
}

impl PphRate {
    /// Rate as a percentage value (e.g. 1.5 for "1.5%").
    pub fn percent(&self) -> Decimal {
        match self {
            Self::HalfPercent => dec!(0.5),
            Self::OneAndHalfPercent => dec!(1.5),
            Self::TwoPercent => dec!(2),
        }
    }

    /// Label as stored in invoice records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HalfPercent => "0.5%",
            Self::OneAndHalfPercent => "1.5%",
            Self::TwoPercent => "2%",
        }
    }

    /// Parse from the stored label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "0.5%" => Some(Self::HalfPercent),
            "1.5%" => Some(Self::OneAndHalfPercent),
            "2%" => Some(Self::TwoPercent),
            _ => None,
        }
    }
}

/// A purchased good or service on an invoice.
///
/// `netto` is derived: it is recomputed whenever the item is repriced and is
/// never read back as an input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    pub unit: String,
    /// Entered by the user for BOS, derived from `total_price` for BOP.
    pub unit_price: Decimal,
    /// Derived from `unit_price` for BOS, entered by the user for BOP.
    pub total_price: Decimal,
    /// Whether the price includes 11% PPN.
    pub ppn: bool,
    /// Whether PPh is withheld on this item.
    pub pph: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pph_percentage: Option<PphRate>,
    pub netto: Decimal,
}

/// Aggregate amounts of all line items on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceSummary {
    /// Sum of line `total_price` (bruto).
    pub subtotal: Decimal,
    #[serde(rename = "totalPPN")]
    pub total_ppn: Decimal,
    #[serde(rename = "totalPPH")]
    pub total_pph: Decimal,
    pub total_netto: Decimal,
    /// Total administration deduction.
    pub administration: Decimal,
    /// BOS only: 4% share of the administration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_four_percent: Option<Decimal>,
    /// BOS only: 1% share of the administration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_one_percent: Option<Decimal>,
    /// Amount that reaches the school.
    pub sekolah_amount: Decimal,
    pub total: Decimal,
}

/// A stored invoice ("faktur").
///
/// Field names on the wire follow the invoice history file format, which mixes
/// snake_case and camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice number, unique key of the history log.
    pub no_faktur: String,
    /// Issue date as displayed (e.g. "Selasa, 15 April 2025").
    pub tanggal: String,
    pub sumber_dana: FundSource,
    /// Activity (kegiatan) the purchase belongs to.
    pub kegiatan: String,
    pub items: Vec<LineItem>,
    pub summary: InvoiceSummary,
    #[serde(rename = "accountCode")]
    pub account_code: String,
    pub recipient: String,
    /// Activity date, ISO `YYYY-MM-DD` for records created by this crate.
    #[serde(rename = "activityDate")]
    pub activity_date: String,
    /// Zero-padded transaction sequence (e.g. "001").
    #[serde(rename = "transactionNumber")]
    pub transaction_number: String,
    /// Creation time. Older records may carry a `Z`-suffixed UTC timestamp.
    #[serde(deserialize_with = "super::dates::deserialize_timestamp")]
    pub timestamp: NaiveDateTime,
}

impl Invoice {
    /// Reprice every item and rebuild the summary.
    ///
    /// Running this twice on unchanged items yields the same summary.
    pub fn recalculate(&mut self) {
        self.summary = summary::recalculate_items(&mut self.items, self.sumber_dana);
    }

    /// Append a line item and recalculate.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
        self.recalculate();
    }

    /// Replace the item with the same id and recalculate.
    pub fn replace_item(&mut self, item: LineItem) -> Result<(), FakturError> {
        let slot = self
            .items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or_else(|| {
                FakturError::Builder(format!(
                    "invoice {} has no item with id '{}'",
                    self.no_faktur, item.id
                ))
            })?;
        *slot = item;
        self.recalculate();
        Ok(())
    }

    /// Remove the item with the given id and recalculate.
    /// Returns the removed item, if any.
    pub fn remove_item(&mut self, id: &str) -> Option<LineItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        let removed = self.items.remove(pos);
        self.recalculate();
        Some(removed)
    }
}
