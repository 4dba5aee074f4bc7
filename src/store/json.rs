//! Single-file JSON stores.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{InvoiceStore, upsert};
use crate::core::{
    FakturError, FundSource, Invoice, SequenceStore, TransactionNumber, next_sequence,
};

/// [`InvoiceStore`] backed by one JSON array file.
///
/// A missing file reads as an empty history. Every write rewrites the file.
#[derive(Debug, Clone)]
pub struct JsonInvoiceStore {
    path: PathBuf,
}

impl JsonInvoiceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InvoiceStore for JsonInvoiceStore {
    fn load_invoices(&self) -> Result<Vec<Invoice>, FakturError> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }

    fn save_invoice(&mut self, invoice: Invoice) -> Result<(), FakturError> {
        let mut invoices = self.load_invoices()?;
        tracing::debug!(
            no_faktur = %invoice.no_faktur,
            path = %self.path.display(),
            "saving invoice"
        );
        upsert(&mut invoices, invoice);
        write_json(&self.path, &invoices)
    }

    fn delete_invoice(&mut self, no_faktur: &str) -> Result<bool, FakturError> {
        let mut invoices = self.load_invoices()?;
        let before = invoices.len();
        invoices.retain(|i| i.no_faktur != no_faktur);
        if invoices.len() == before {
            return Ok(false);
        }
        write_json(&self.path, &invoices)?;
        Ok(true)
    }
}

/// [`SequenceStore`] backed by one JSON object file: `{"bos": 3, "bop": 1}`.
#[derive(Debug, Clone)]
pub struct JsonSequenceStore {
    path: PathBuf,
}

impl JsonSequenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn counters(&self) -> Result<BTreeMap<String, u32>, FakturError> {
        Ok(read_json(&self.path)?.unwrap_or_default())
    }
}

impl SequenceStore for JsonSequenceStore {
    fn peek(&self, fund: FundSource) -> Result<u32, FakturError> {
        Ok(self.counters()?.get(fund.key()).copied().unwrap_or(0))
    }

    fn advance(&mut self, fund: FundSource) -> Result<TransactionNumber, FakturError> {
        let mut counters = self.counters()?;
        let last = counters.get(fund.key()).copied().unwrap_or(0);
        let next = next_sequence(last, fund)?;
        counters.insert(fund.key().to_string(), next);
        write_json(&self.path, &counters)?;
        Ok(TransactionNumber(next))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, FakturError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&text)?))
}

/// Write through a sibling temp file so a crash never leaves half a file.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), FakturError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
