//! SPJ document chain: letter numbers, document templates and receipt text.
//!
//! Derives the numbers of the ten procurement documents that accompany an
//! invoice, and prepares display amounts for the template layer.
//!
//! # Example
//!
//! ```ignore
//! use faktur::spj::*;
//!
//! let letters = generate_letter_numbers(&invoice, "B07")?;
//! for (document, number) in letters.iter() {
//!     println!("{document}: {number}");
//! }
//!
//! let bundle = SpjBundle::prepare(&invoice, &SpjConfig::default())?;
//! println!("{}", bundle.total_in_words);
//! ```

mod bundle;
mod document;
mod letters;
mod terbilang;

pub use bundle::{FormattedSummary, SpjBundle};
pub use document::SpjDocument;
pub use letters::{
    BASTB_TAG, KWITANSI_TAG, LetterNumberSet, SURAT_JALAN_TAG, generate_letter_numbers,
    increment_sequence,
};
pub use terbilang::{terbilang, terbilang_rupiah};
