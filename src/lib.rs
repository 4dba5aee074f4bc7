//! # faktur
//!
//! Invoicing for Indonesian school funding (BOS / BOP): PPN and PPh
//! calculation, the administration split, invoice numbering, and the document
//! numbers of the SPJ (accountability report) chain.
//!
//! All monetary values use [`rust_decimal::Decimal`]; nothing is rounded
//! until an amount is formatted as Rupiah.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use faktur::core::*;
//! use rust_decimal_macros::dec;
//!
//! let items = vec![
//!     LineItemBuilder::bos("1", "Kertas A4", 10, "rim", dec!(100)).build(),
//! ];
//! let summary = compute_summary(&items, FundSource::Bos);
//!
//! assert_eq!(summary.total_netto, dec!(1000));
//! assert_eq!(summary.administration, dec!(50));
//! assert_eq!(format_rupiah(summary.total), "Rp 950");
//!
//! let date = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap();
//! assert_eq!(generate_invoice_number(date, 1, "B07"), "HMI.F.202504151B07");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Line items, tax and summary calculation, validation, numbering |
//! | `spj` (default) | SPJ letter numbers, document templates, terbilang |
//! | `store` | In-memory and JSON-file invoice and sequence stores |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "spj")]
pub mod spj;

#[cfg(feature = "store")]
pub mod store;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
