use serde::Serialize;

use super::letters::LetterNumberSet;
use super::terbilang::terbilang_rupiah;
use crate::core::{FakturError, Invoice, InvoiceSummary, SpjConfig, format_rupiah};

/// Summary amounts formatted for printing (`Rp 1.500.000`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSummary {
    pub subtotal: String,
    #[serde(rename = "totalPPN")]
    pub total_ppn: String,
    #[serde(rename = "totalPPH")]
    pub total_pph: String,
    pub total_netto: String,
    pub administration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_four_percent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_one_percent: Option<String>,
    pub sekolah_amount: String,
    pub total: String,
}

impl From<&InvoiceSummary> for FormattedSummary {
    fn from(s: &InvoiceSummary) -> Self {
        Self {
            subtotal: format_rupiah(s.subtotal),
            total_ppn: format_rupiah(s.total_ppn),
            total_pph: format_rupiah(s.total_pph),
            total_netto: format_rupiah(s.total_netto),
            administration: format_rupiah(s.administration),
            admin_four_percent: s.admin_four_percent.map(format_rupiah),
            admin_one_percent: s.admin_one_percent.map(format_rupiah),
            sekolah_amount: format_rupiah(s.sekolah_amount),
            total: format_rupiah(s.total),
        }
    }
}

/// Everything the document templates of one invoice need.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpjBundle<'a> {
    pub invoice: &'a Invoice,
    pub letters: LetterNumberSet,
    pub amounts: FormattedSummary,
    /// Total spelled out for the kwitansi.
    pub total_in_words: String,
}

impl<'a> SpjBundle<'a> {
    /// Derive letter numbers and display amounts for `invoice`.
    pub fn prepare(invoice: &'a Invoice, config: &SpjConfig) -> Result<Self, FakturError> {
        let letters = LetterNumberSet::derive(invoice, config)?;
        Ok(Self {
            invoice,
            letters,
            amounts: FormattedSummary::from(&invoice.summary),
            total_in_words: terbilang_rupiah(invoice.summary.total),
        })
    }
}
