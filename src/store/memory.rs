use super::{InvoiceStore, upsert};
use crate::core::{FakturError, Invoice};

/// In-memory [`InvoiceStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryInvoiceStore {
    invoices: Vec<Invoice>,
}

impl MemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.invoices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invoices.is_empty()
    }
}

impl InvoiceStore for MemoryInvoiceStore {
    fn load_invoices(&self) -> Result<Vec<Invoice>, FakturError> {
        Ok(self.invoices.clone())
    }

    fn save_invoice(&mut self, invoice: Invoice) -> Result<(), FakturError> {
        upsert(&mut self.invoices, invoice);
        Ok(())
    }

    fn delete_invoice(&mut self, no_faktur: &str) -> Result<bool, FakturError> {
        let before = self.invoices.len();
        self.invoices.retain(|i| i.no_faktur != no_faktur);
        Ok(self.invoices.len() != before)
    }

    fn find_invoice(&self, no_faktur: &str) -> Result<Option<Invoice>, FakturError> {
        Ok(self
            .invoices
            .iter()
            .find(|i| i.no_faktur == no_faktur)
            .cloned())
    }
}
