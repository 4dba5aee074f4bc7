use thiserror::Error;

/// Errors that can occur while building, numbering or storing invoices.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FakturError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice or transaction sequence error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// A document number of the SPJ chain could not be derived.
    #[error("cannot derive {document} number: {reason}")]
    LetterNumber {
        /// Field name of the failing document (e.g. "suratPenawaran1").
        document: &'static str,
        /// Why the derivation failed.
        reason: String,
    },

    /// An invoice with this number is already stored.
    #[error("invoice number {0} is already taken")]
    DuplicateInvoice(String),

    /// Invoice or sequence store failure.
    #[error("store error: {0}")]
    Store(String),

    /// Filesystem error from a file-backed store.
    #[cfg(feature = "store")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error from a file-backed store.
    #[cfg(feature = "store")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "items[0].name").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Join a list of validation errors into one [`FakturError::Validation`].
pub(crate) fn validation_failure(errors: &[ValidationError]) -> FakturError {
    let msg = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    FakturError::Validation(msg)
}
