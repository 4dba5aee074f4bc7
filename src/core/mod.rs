//! Core invoice types, tax and summary calculation, validation, and numbering.
//!
//! This module covers everything needed to compose a BOS or BOP invoice:
//! line items, PPN/PPh arithmetic, the administration split, invoice numbers
//! and the per-fund transaction sequence.

mod builder;
mod config;
mod currency;
pub mod dates;
mod error;
mod numbering;
mod summary;
pub mod tax;
mod types;
mod validation;

pub use builder::*;
pub use config::*;
pub use currency::*;
pub use dates::{format_date, format_long_date, parse_activity_date, parse_timestamp, roman_month};
pub use error::*;
pub use numbering::*;
pub use summary::*;
pub use tax::{calculate_ppn, calculate_pph, line_netto, line_ppn, line_pph};
pub use types::*;
pub use validation::*;
