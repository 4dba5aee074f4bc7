use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::FakturError;
use super::types::FundSource;

/// School code used when none is configured.
pub const DEFAULT_SCHOOL_CODE: &str = "B07";

/// Issuer prefix of every invoice and derived document code.
pub const INVOICE_PREFIX: &str = "HMI";

/// Tag segment marking an invoice ("faktur") number.
pub const INVOICE_TAG: &str = "F";

/// Generate the canonical invoice number
/// `HMI.F.{YYYY}{MM}{DD}{sequence}{school_code}`.
///
/// `date` is the generation date, not the activity date. The sequence is
/// written as-is without zero padding, so `(2025-04-15, 1, "B07")` gives
/// `HMI.F.202504151B07`. Uniqueness against existing invoices is the
/// caller's concern.
///
/// ```
/// use chrono::NaiveDate;
/// use faktur::core::generate_invoice_number;
///
/// let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
/// assert_eq!(generate_invoice_number(date, 12, "B07"), "HMI.F.2025041512B07");
/// ```
pub fn generate_invoice_number(date: NaiveDate, sequence: u32, school_code: &str) -> String {
    format_invoice_number(INVOICE_PREFIX, date, &sequence.to_string(), school_code)
}

pub(crate) fn format_invoice_number(
    prefix: &str,
    date: NaiveDate,
    sequence: &str,
    school_code: &str,
) -> String {
    format!(
        "{prefix}.{INVOICE_TAG}.{}{sequence}{school_code}",
        date.format("%Y%m%d")
    )
}

/// Generation date embedded in an invoice number, if it carries one.
///
/// Reads the eight digits following the tag segment, so both
/// `HMI.F.20250415001B07` and `HMI.P1.20250415001B07` yield 2025-04-15.
pub fn invoice_number_date(number: &str) -> Option<NaiveDate> {
    let mut segments = number.splitn(3, '.');
    let _prefix = segments.next()?;
    let _tag = segments.next()?;
    let body = segments.next()?;
    let digits = body.get(..8)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(digits, "%Y%m%d").ok()
}

/// Per-fund transaction sequence number.
///
/// Displays zero-padded to three digits (`7` → `"007"`); wider values are
/// printed in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionNumber(pub u32);

impl TransactionNumber {
    /// Raw sequence value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TransactionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Persisted "last issued" transaction sequence, one counter per fund.
///
/// Advancing is the only side effect of invoice creation. Implementations
/// must persist the new value before returning it.
pub trait SequenceStore {
    /// Last issued sequence for `fund`, `0` if none has been issued.
    fn peek(&self, fund: FundSource) -> Result<u32, FakturError>;

    /// Increment the counter for `fund`, persist it and return the new number.
    fn advance(&mut self, fund: FundSource) -> Result<TransactionNumber, FakturError>;
}

/// In-memory [`SequenceStore`].
#[derive(Debug, Clone, Default)]
pub struct MemorySequenceStore {
    last: HashMap<FundSource, u32>,
}

impl MemorySequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the given last-issued counters.
    pub fn starting_at(bos: u32, bop: u32) -> Self {
        let mut last = HashMap::new();
        last.insert(FundSource::Bos, bos);
        last.insert(FundSource::Bop, bop);
        Self { last }
    }
}

impl SequenceStore for MemorySequenceStore {
    fn peek(&self, fund: FundSource) -> Result<u32, FakturError> {
        Ok(self.last.get(&fund).copied().unwrap_or(0))
    }

    fn advance(&mut self, fund: FundSource) -> Result<TransactionNumber, FakturError> {
        let next = next_sequence(self.peek(fund)?, fund)?;
        self.last.insert(fund, next);
        Ok(TransactionNumber(next))
    }
}

pub(crate) fn next_sequence(last: u32, fund: FundSource) -> Result<u32, FakturError> {
    last.checked_add(1).ok_or_else(|| {
        FakturError::Numbering(format!("{fund} transaction sequence exhausted at {last}"))
    })
}
