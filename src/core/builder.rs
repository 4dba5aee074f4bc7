use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::config::SpjConfig;
use super::dates::format_long_date;
use super::error::{FakturError, ValidationError, validation_failure};
use super::numbering::SequenceStore;
use super::summary::{recalculate_items, reprice};
use super::types::*;
use super::validation::validate_items;

/// Builder for [`LineItem`].
///
/// BOS items are entered by unit price, BOP items by total price; the other
/// price and the netto are derived on [`build`](Self::build).
///
/// ```
/// use faktur::core::*;
/// use rust_decimal_macros::dec;
///
/// let bos = LineItemBuilder::bos("1", "Kertas A4", 10, "rim", dec!(55000)).ppn().build();
/// assert_eq!(bos.total_price, dec!(550000));
///
/// let bop = LineItemBuilder::bop("1", "Snack rapat", 4, "kotak", dec!(100000)).build();
/// assert_eq!(bop.unit_price, dec!(25000));
/// ```
pub struct LineItemBuilder {
    id: String,
    name: String,
    quantity: i64,
    unit: String,
    fund: FundSource,
    entered_price: Decimal,
    ppn: bool,
    pph: Option<PphRate>,
}

impl LineItemBuilder {
    /// BOS item: `unit_price` is entered, `total_price = quantity × unit_price`.
    pub fn bos(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        unit: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self::new(FundSource::Bos, id, name, quantity, unit, unit_price)
    }

    /// BOP item: `total_price` is entered, `unit_price = total_price / quantity`.
    pub fn bop(
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        unit: impl Into<String>,
        total_price: Decimal,
    ) -> Self {
        Self::new(FundSource::Bop, id, name, quantity, unit, total_price)
    }

    /// Item for `fund`, with `price` interpreted the way that fund enters it.
    pub fn new(
        fund: FundSource,
        id: impl Into<String>,
        name: impl Into<String>,
        quantity: i64,
        unit: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            unit: unit.into(),
            fund,
            entered_price: price,
            ppn: false,
            pph: None,
        }
    }

    /// Mark the price as 11% PPN-inclusive.
    pub fn ppn(mut self) -> Self {
        self.ppn = true;
        self
    }

    /// Withhold PPh at `rate`.
    pub fn pph(mut self, rate: PphRate) -> Self {
        self.pph = Some(rate);
        self
    }

    pub fn build(self) -> LineItem {
        let (unit_price, total_price) = match self.fund {
            FundSource::Bos => (self.entered_price, Decimal::ZERO),
            FundSource::Bop => (Decimal::ZERO, self.entered_price),
        };
        let mut item = LineItem {
            id: self.id,
            name: self.name,
            quantity: self.quantity,
            unit: self.unit,
            unit_price,
            total_price,
            ppn: self.ppn,
            pph: self.pph.is_some(),
            pph_percentage: self.pph,
            netto: Decimal::ZERO,
        };
        reprice(&mut item, self.fund);
        item
    }
}

/// An invoice being composed, before it has a number.
///
/// [`create`](Self::create) is the "Buat Faktur" step: it validates the
/// draft, advances the transaction sequence and stamps the invoice number.
///
/// ```
/// use chrono::NaiveDate;
/// use faktur::core::*;
/// use rust_decimal_macros::dec;
///
/// let issued = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let mut sequences = MemorySequenceStore::new();
///
/// let invoice = InvoiceDraft::new(FundSource::Bos)
///     .kegiatan("Pengadaan ATK")
///     .recipient("CV Maju Jaya")
///     .activity_date(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap())
///     .add_item(LineItemBuilder::bos("1", "Kertas A4", 10, "rim", dec!(55000)).build())
///     .create(issued, &mut sequences, &SpjConfig::default())
///     .unwrap();
///
/// assert_eq!(invoice.no_faktur, "HMI.F.202504151B07");
/// assert_eq!(invoice.transaction_number, "001");
/// ```
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    fund: FundSource,
    kegiatan: String,
    recipient: String,
    account_code: String,
    activity_date: Option<NaiveDate>,
    items: Vec<LineItem>,
}

impl InvoiceDraft {
    pub fn new(fund: FundSource) -> Self {
        Self {
            fund,
            kegiatan: String::new(),
            recipient: String::new(),
            account_code: String::new(),
            activity_date: None,
            items: Vec::new(),
        }
    }

    pub fn kegiatan(mut self, kegiatan: impl Into<String>) -> Self {
        self.kegiatan = kegiatan.into();
        self
    }

    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = recipient.into();
        self
    }

    pub fn account_code(mut self, code: impl Into<String>) -> Self {
        self.account_code = code.into();
        self
    }

    pub fn activity_date(mut self, date: NaiveDate) -> Self {
        self.activity_date = Some(date);
        self
    }

    pub fn add_item(mut self, item: LineItem) -> Self {
        self.items.push(item);
        self
    }

    /// Remove an item by id.
    pub fn remove_item(mut self, id: &str) -> Self {
        self.items.retain(|i| i.id != id);
        self
    }

    pub fn fund(&self) -> FundSource {
        self.fund
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Live summary of the current items, as shown while editing.
    pub fn summary(&self) -> InvoiceSummary {
        let mut items = self.items.clone();
        recalculate_items(&mut items, self.fund)
    }

    /// Validate the draft. Returns all errors found.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.kegiatan.trim().is_empty() {
            errors.push(ValidationError::new("kegiatan", "kegiatan must not be empty"));
        }
        if self.recipient.trim().is_empty() {
            errors.push(ValidationError::new("recipient", "recipient must not be empty"));
        }
        if self.activity_date.is_none() {
            errors.push(ValidationError::new(
                "activityDate",
                "activity date is required",
            ));
        }

        errors.extend(validate_items(&self.items, self.fund));
        errors
    }

    /// Turn the draft into a numbered invoice.
    ///
    /// Advances the per-fund transaction sequence in `sequences` and uses it
    /// for both `transaction_number` and the invoice number. The sequence is
    /// advanced before the caller gets to save the invoice: if saving fails
    /// afterwards the number is lost and the sequence has a gap.
    ///
    /// BOS and BOP count separately but share one invoice number format, so
    /// the first BOS and the first BOP invoice of a day get the same
    /// `no_faktur`. This method does not see the history and cannot detect
    /// that; `store::issue_invoice` skips numbers that are already stored.
    ///
    /// With the default config the sequence is embedded unpadded
    /// (`HMI.F.202504151B07`) while `transaction_number` and the SPJ codes
    /// derived from it are padded (`HMI.SJ.20250415001B07`). Set
    /// [`SpjConfigBuilder::invoice_sequence_width`](super::SpjConfigBuilder::invoice_sequence_width)
    /// to 3 to make both carry `001`.
    pub fn create<S>(
        self,
        issued_at: NaiveDateTime,
        sequences: &mut S,
        config: &SpjConfig,
    ) -> Result<Invoice, FakturError>
    where
        S: SequenceStore + ?Sized,
    {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(validation_failure(&errors));
        }
        let activity_date = self
            .activity_date
            .ok_or_else(|| FakturError::Builder("activity date is required".into()))?;

        let transaction = sequences.advance(self.fund)?;
        tracing::debug!(
            fund = %self.fund,
            transaction = %transaction,
            "advanced transaction sequence"
        );

        let mut items = self.items;
        let summary = recalculate_items(&mut items, self.fund);
        let issue_date = issued_at.date();

        let invoice = Invoice {
            no_faktur: config.invoice_number(issue_date, transaction.value()),
            tanggal: format_long_date(issue_date),
            sumber_dana: self.fund,
            kegiatan: self.kegiatan,
            items,
            summary,
            account_code: self.account_code,
            recipient: self.recipient,
            activity_date: activity_date.format("%Y-%m-%d").to_string(),
            transaction_number: transaction.to_string(),
            timestamp: issued_at,
        };

        tracing::info!(
            no_faktur = %invoice.no_faktur,
            fund = %invoice.sumber_dana,
            items = invoice.items.len(),
            "invoice created"
        );
        Ok(invoice)
    }
}
