//! Invoice history and sequence persistence.
//!
//! The calculation engine never touches storage; these stores sit next to it
//! and are driven by the caller. Two implementations of each interface are
//! provided: in memory, and a single JSON file.
//!
//! # Example
//!
//! ```ignore
//! use faktur::store::*;
//!
//! let mut sequences = JsonSequenceStore::new("data/sequences.json");
//! let mut invoices = JsonInvoiceStore::new("data/invoices.json");
//!
//! let invoice = issue_invoice(draft, now, &mut sequences, &mut invoices, &config)?;
//! ```

mod json;
mod memory;

pub use json::{JsonInvoiceStore, JsonSequenceStore};
pub use memory::MemoryInvoiceStore;

use chrono::NaiveDateTime;

use crate::core::{FakturError, FundSource, Invoice, InvoiceDraft, SequenceStore, SpjConfig};

/// How many sequence numbers [`issue_invoice`] tries before giving up.
pub const MAX_NUMBER_ATTEMPTS: usize = 100;

/// Invoice history keyed by `no_faktur`.
pub trait InvoiceStore {
    /// All stored invoices, in insertion order.
    fn load_invoices(&self) -> Result<Vec<Invoice>, FakturError>;

    /// Insert `invoice`, or replace the stored invoice with the same number.
    fn save_invoice(&mut self, invoice: Invoice) -> Result<(), FakturError>;

    /// Delete by number. Returns whether an invoice was removed.
    fn delete_invoice(&mut self, no_faktur: &str) -> Result<bool, FakturError>;

    /// Insert `invoice` only if its number is not stored yet.
    fn insert_invoice(&mut self, invoice: Invoice) -> Result<(), FakturError> {
        if self.find_invoice(&invoice.no_faktur)?.is_some() {
            return Err(FakturError::DuplicateInvoice(invoice.no_faktur));
        }
        self.save_invoice(invoice)
    }

    /// Look up one invoice by number.
    fn find_invoice(&self, no_faktur: &str) -> Result<Option<Invoice>, FakturError> {
        Ok(self
            .load_invoices()?
            .into_iter()
            .find(|i| i.no_faktur == no_faktur))
    }
}

/// Create `draft` and store it under a number nobody holds yet.
///
/// BOS and BOP keep separate sequences but share the invoice number format.
/// When the number produced for `draft` already belongs to a stored invoice,
/// the draft's sequence is advanced again until a free number comes up. The
/// skipped values are not reused.
pub fn issue_invoice<Q, S>(
    draft: InvoiceDraft,
    issued_at: NaiveDateTime,
    sequences: &mut Q,
    invoices: &mut S,
    config: &SpjConfig,
) -> Result<Invoice, FakturError>
where
    Q: SequenceStore + ?Sized,
    S: InvoiceStore + ?Sized,
{
    for _ in 0..MAX_NUMBER_ATTEMPTS {
        let invoice = draft.clone().create(issued_at, sequences, config)?;
        if invoices.find_invoice(&invoice.no_faktur)?.is_some() {
            tracing::warn!(
                no_faktur = %invoice.no_faktur,
                fund = %invoice.sumber_dana,
                "invoice number already taken, advancing sequence"
            );
            continue;
        }
        invoices.insert_invoice(invoice.clone())?;
        return Ok(invoice);
    }
    Err(FakturError::Numbering(format!(
        "no free invoice number for {} after {MAX_NUMBER_ATTEMPTS} attempts",
        draft.fund()
    )))
}

/// Invoice history, newest first, optionally restricted to one fund.
pub fn history<S>(store: &S, fund: Option<FundSource>) -> Result<Vec<Invoice>, FakturError>
where
    S: InvoiceStore + ?Sized,
{
    let mut invoices: Vec<Invoice> = store
        .load_invoices()?
        .into_iter()
        .filter(|i| fund.is_none_or(|f| i.sumber_dana == f))
        .collect();
    invoices.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(invoices)
}

/// Insert or replace by `no_faktur`, keeping the position of a replaced entry.
pub(crate) fn upsert(invoices: &mut Vec<Invoice>, invoice: Invoice) {
    match invoices.iter_mut().find(|i| i.no_faktur == invoice.no_faktur) {
        Some(slot) => *slot = invoice,
        None => invoices.push(invoice),
    }
}
