use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::numbering::{DEFAULT_SCHOOL_CODE, INVOICE_PREFIX, format_invoice_number};

/// Issuer and school settings shared by invoice and letter numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpjConfig {
    /// School code appended to every invoice and document code (e.g. "B07").
    pub school_code: String,
    /// Issuer prefix of invoice and document codes (e.g. "HMI").
    pub prefix: String,
    /// Classification segment of office letters (e.g. "PK.01.01").
    pub letter_classification: String,
    /// Sequence of the first office letter (surat pesanan).
    pub first_letter_sequence: u32,
    /// Zero-padding width of the first office letter sequence.
    pub letter_sequence_width: usize,
    /// Zero-padding width of the sequence inside invoice numbers.
    /// `None` writes the sequence unpadded.
    pub invoice_sequence_width: Option<usize>,
}

impl Default for SpjConfig {
    fn default() -> Self {
        Self {
            school_code: DEFAULT_SCHOOL_CODE.into(),
            prefix: INVOICE_PREFIX.into(),
            letter_classification: "PK.01.01".into(),
            first_letter_sequence: 1,
            letter_sequence_width: 3,
            invoice_sequence_width: None,
        }
    }
}

impl SpjConfig {
    /// Invoice number for `date` and `sequence` under this configuration.
    ///
    /// With the default configuration this equals
    /// [`generate_invoice_number`](super::generate_invoice_number).
    pub fn invoice_number(&self, date: NaiveDate, sequence: u32) -> String {
        let sequence = match self.invoice_sequence_width {
            Some(width) => format!("{sequence:0width$}"),
            None => sequence.to_string(),
        };
        format_invoice_number(&self.prefix, date, &sequence, &self.school_code)
    }
}

/// Builder for [`SpjConfig`].
///
/// # Example
///
/// ```
/// use faktur::core::SpjConfigBuilder;
///
/// let config = SpjConfigBuilder::new("C11")
///     .invoice_sequence_width(3)
///     .build();
/// assert_eq!(config.school_code, "C11");
/// ```
pub struct SpjConfigBuilder {
    config: SpjConfig,
}

impl SpjConfigBuilder {
    /// Create a new builder for the given school code.
    pub fn new(school_code: impl Into<String>) -> Self {
        Self {
            config: SpjConfig {
                school_code: school_code.into(),
                ..Default::default()
            },
        }
    }

    /// Set the issuer prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Set the office letter classification segment.
    pub fn letter_classification(mut self, code: impl Into<String>) -> Self {
        self.config.letter_classification = code.into();
        self
    }

    /// Set the first office letter sequence and its padding width.
    pub fn first_letter_sequence(mut self, sequence: u32, width: usize) -> Self {
        self.config.first_letter_sequence = sequence;
        self.config.letter_sequence_width = width;
        self
    }

    /// Zero-pad the invoice number sequence to `width` digits.
    pub fn invoice_sequence_width(mut self, width: usize) -> Self {
        self.config.invoice_sequence_width = Some(width);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> SpjConfig {
        self.config
    }
}
