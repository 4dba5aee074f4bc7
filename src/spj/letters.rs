//! Document numbers of the SPJ chain.
//!
//! Two independent families are derived from one invoice:
//!
//! - office letters `NNN/PK.01.01/<RomanMonth>/<Year>`, numbered from the
//!   activity date and incremented document by document;
//! - invoice-derived codes `HMI.<TAG>.{YYYYMMDD}{transaction}{school}`.
//!
//! Derivation is pure: the same invoice always yields the same set and no
//! counter is advanced.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::document::SpjDocument;
use crate::core::dates::{parse_activity_date, roman_month};
use crate::core::{FakturError, INVOICE_TAG, Invoice, SpjConfig, invoice_number_date};

/// Tag of the delivery note code.
pub const SURAT_JALAN_TAG: &str = "SJ";
/// Tag of the goods handover code.
pub const BASTB_TAG: &str = "BAST";
/// Tag of the receipt code.
pub const KWITANSI_TAG: &str = "K";

/// Numbers of the ten documents derived from one invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterNumberSet {
    #[serde(rename = "suratPesanan")]
    pub surat_pesanan: String,
    #[serde(rename = "suratNegosiasi")]
    pub surat_negosiasi: String,
    #[serde(rename = "suratBASTNego")]
    pub surat_bast_nego: String,
    pub spk: String,
    pub bapb: String,
    #[serde(rename = "suratPenawaran1")]
    pub surat_penawaran_1: String,
    #[serde(rename = "suratPenawaran2")]
    pub surat_penawaran_2: String,
    #[serde(rename = "suratJalan")]
    pub surat_jalan: String,
    pub bastb: String,
    pub kwitansi: String,
}

/// Derive the SPJ document numbers of `invoice` for `school_code`, with the
/// default prefix and letter classification.
///
/// ```
/// use chrono::NaiveDate;
/// use faktur::core::*;
/// use faktur::spj::generate_letter_numbers;
/// use rust_decimal_macros::dec;
///
/// let issued = NaiveDate::from_ymd_opt(2025, 4, 15).unwrap().and_hms_opt(8, 0, 0).unwrap();
/// let invoice = InvoiceDraft::new(FundSource::Bos)
///     .kegiatan("Pengadaan ATK")
///     .recipient("CV Maju Jaya")
///     .activity_date(NaiveDate::from_ymd_opt(2025, 4, 15).unwrap())
///     .add_item(LineItemBuilder::bos("1", "Kertas A4", 10, "rim", dec!(55000)).build())
///     .create(issued, &mut MemorySequenceStore::new(), &SpjConfig::default())
///     .unwrap();
///
/// let letters = generate_letter_numbers(&invoice, "B07").unwrap();
/// assert_eq!(letters.surat_pesanan, "001/PK.01.01/IV/2025");
/// assert_eq!(letters.kwitansi, "HMI.K.20250415001B07");
/// ```
pub fn generate_letter_numbers(
    invoice: &Invoice,
    school_code: &str,
) -> Result<LetterNumberSet, FakturError> {
    let config = SpjConfig {
        school_code: school_code.into(),
        ..Default::default()
    };
    LetterNumberSet::derive(invoice, &config)
}

impl LetterNumberSet {
    /// Derive the SPJ document numbers of `invoice` under `config`.
    ///
    /// An activity date that cannot be parsed is not fatal: the invoice-derived
    /// codes embed the stored string unchanged and the office letters fall
    /// back to the generation date inside the invoice number. Both fallbacks
    /// are logged at `warn`.
    pub fn derive(invoice: &Invoice, config: &SpjConfig) -> Result<Self, FakturError> {
        let activity = parse_activity_date(&invoice.activity_date);
        if activity.is_none() {
            tracing::warn!(
                no_faktur = %invoice.no_faktur,
                activity_date = %invoice.activity_date,
                "unparseable activity date, using stored text in document codes"
            );
        }

        let letter_date = match activity {
            Some(date) => date,
            None => {
                let date = invoice_number_date(&invoice.no_faktur).ok_or_else(|| {
                    FakturError::LetterNumber {
                        document: SpjDocument::SuratPesanan.key(),
                        reason: format!(
                            "activity date '{}' is unparseable and invoice number '{}' carries no date",
                            invoice.activity_date, invoice.no_faktur
                        ),
                    }
                })?;
                tracing::warn!(
                    no_faktur = %invoice.no_faktur,
                    fallback = %date,
                    "office letters numbered from the invoice generation date"
                );
                date
            }
        };

        let surat_pesanan = first_office_letter(letter_date, config)?;
        let surat_negosiasi = increment_sequence(&surat_pesanan);
        let surat_bast_nego = increment_sequence(&surat_negosiasi);
        let spk = increment_sequence(&surat_bast_nego);
        let bapb = increment_sequence(&spk);

        let surat_penawaran_1 = retag(&invoice.no_faktur, "P1", SpjDocument::SuratPenawaran1)?;
        let surat_penawaran_2 = retag(&invoice.no_faktur, "P2", SpjDocument::SuratPenawaran2)?;

        if invoice.transaction_number.trim().is_empty() {
            return Err(FakturError::LetterNumber {
                document: SpjDocument::SuratJalan.key(),
                reason: format!("invoice {} has no transaction number", invoice.no_faktur),
            });
        }
        let date_part = match activity {
            Some(date) => date.format("%Y%m%d").to_string(),
            None => invoice.activity_date.clone(),
        };
        let code = |tag: &str| {
            format!(
                "{}.{tag}.{date_part}{}{}",
                config.prefix, invoice.transaction_number, config.school_code
            )
        };

        Ok(Self {
            surat_pesanan,
            surat_negosiasi,
            surat_bast_nego,
            spk,
            bapb,
            surat_penawaran_1,
            surat_penawaran_2,
            surat_jalan: code(SURAT_JALAN_TAG),
            bastb: code(BASTB_TAG),
            kwitansi: code(KWITANSI_TAG),
        })
    }

    /// Number of a document; `None` for [`SpjDocument::Faktur`], whose number
    /// is the invoice's own.
    pub fn get(&self, document: SpjDocument) -> Option<&str> {
        let number = match document {
            SpjDocument::Faktur => return None,
            SpjDocument::SuratPenawaran1 => &self.surat_penawaran_1,
            SpjDocument::SuratPenawaran2 => &self.surat_penawaran_2,
            SpjDocument::SuratPesanan => &self.surat_pesanan,
            SpjDocument::SuratNegosiasi => &self.surat_negosiasi,
            SpjDocument::BastNegosiasi => &self.surat_bast_nego,
            SpjDocument::Spk => &self.spk,
            SpjDocument::Bapb => &self.bapb,
            SpjDocument::SuratJalan => &self.surat_jalan,
            SpjDocument::Bastb => &self.bastb,
            SpjDocument::Kwitansi => &self.kwitansi,
        };
        Some(number)
    }

    /// Document numbers in chain order, without the invoice itself.
    pub fn iter(&self) -> impl Iterator<Item = (SpjDocument, &str)> {
        SpjDocument::ALL
            .into_iter()
            .filter_map(move |doc| self.get(doc).map(|n| (doc, n)))
    }
}

fn first_office_letter(date: NaiveDate, config: &SpjConfig) -> Result<String, FakturError> {
    let roman = roman_month(date.month()).ok_or_else(|| FakturError::LetterNumber {
        document: SpjDocument::SuratPesanan.key(),
        reason: format!("no Roman numeral for month {}", date.month()),
    })?;
    Ok(format!(
        "{:0width$}/{}/{roman}/{}",
        config.first_letter_sequence,
        config.letter_classification,
        date.year(),
        width = config.letter_sequence_width
    ))
}

/// Replace the invoice tag segment (`F`) of an invoice number.
fn retag(number: &str, tag: &str, document: SpjDocument) -> Result<String, FakturError> {
    let mut segments: Vec<&str> = number.split('.').collect();
    let slot = segments
        .iter_mut()
        .find(|s| **s == INVOICE_TAG)
        .ok_or_else(|| FakturError::LetterNumber {
            document: document.key(),
            reason: format!("invoice number '{number}' has no '{INVOICE_TAG}' tag segment"),
        })?;
    *slot = tag;
    Ok(segments.join("."))
}

/// Increment the leading sequence of a letter number.
///
/// The trailing digit run of the first `/`-separated segment is incremented
/// and keeps its original width as a minimum: `009 → 010`, `099 → 100`,
/// `999 → 1000`. A first segment without trailing digits gets a new `/001`
/// segment appended.
///
/// ```
/// use faktur::spj::increment_sequence;
///
/// assert_eq!(increment_sequence("001/PK.01.01/IV/2025"), "002/PK.01.01/IV/2025");
/// assert_eq!(increment_sequence("099/PK.01.01/IV/2025"), "100/PK.01.01/IV/2025");
/// ```
pub fn increment_sequence(number: &str) -> String {
    let (head, rest) = match number.split_once('/') {
        Some((head, rest)) => (head, Some(rest)),
        None => (number, None),
    };

    let stem = head.trim_end_matches(|c: char| c.is_ascii_digit());
    if stem.len() == head.len() {
        return format!("{number}/001");
    }
    let next = increment_digits(&head[stem.len()..]);

    match rest {
        Some(rest) => format!("{stem}{next}/{rest}"),
        None => format!("{stem}{next}"),
    }
}

/// Add one to a string of ASCII digits, carrying as needed.
fn increment_digits(digits: &str) -> String {
    let mut out: Vec<char> = Vec::with_capacity(digits.len() + 1);
    let mut carry = true;
    for c in digits.chars().rev() {
        match (carry, c) {
            (true, '9') => out.push('0'),
            (true, d) => {
                out.push(char::from(d as u8 + 1));
                carry = false;
            }
            (false, d) => out.push(d),
        }
    }
    if carry {
        out.push('1');
    }
    out.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increments_and_keeps_width() {
        assert_eq!(increment_sequence("001/PK.01.01/IV/2025"), "002/PK.01.01/IV/2025");
        assert_eq!(increment_sequence("009/PK.01.01/IV/2025"), "010/PK.01.01/IV/2025");
        assert_eq!(increment_sequence("099/PK.01.01/IV/2025"), "100/PK.01.01/IV/2025");
    }

    #[test]
    fn width_grows_past_all_nines() {
        assert_eq!(increment_sequence("999/PK.01.01/XII/2024"), "1000/PK.01.01/XII/2024");
        assert_eq!(increment_sequence("9"), "10");
    }

    #[test]
    fn wider_original_width_is_kept() {
        assert_eq!(increment_sequence("00041/X/2025"), "00042/X/2025");
    }

    #[test]
    fn prefix_letters_in_first_segment_survive() {
        assert_eq!(increment_sequence("SP007/PK.01.01/I/2025"), "SP008/PK.01.01/I/2025");
    }

    #[test]
    fn no_trailing_digits_appends_segment() {
        assert_eq!(increment_sequence("SP/IV/2025"), "SP/IV/2025/001");
        assert_eq!(increment_sequence("ABC"), "ABC/001");
        assert_eq!(increment_sequence(""), "/001");
    }

    #[test]
    fn long_sequences_do_not_overflow() {
        let huge = "99999999999999999999999/A";
        assert_eq!(increment_sequence(huge), "100000000000000000000000/A");
    }

    #[test]
    fn retag_replaces_only_the_tag_segment() {
        let n = "HMI.F.20250415001B07";
        assert_eq!(
            retag(n, "P1", SpjDocument::SuratPenawaran1).unwrap(),
            "HMI.P1.20250415001B07"
        );
        let err = retag("HMI.X.1", "P1", SpjDocument::SuratPenawaran1).unwrap_err();
        assert!(err.to_string().contains("suratPenawaran1"));
    }

    #[test]
    fn first_letter_uses_config() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
        assert_eq!(
            first_office_letter(date, &SpjConfig::default()).unwrap(),
            "001/PK.01.01/XI/2024"
        );
        let config = crate::core::SpjConfigBuilder::new("B07")
            .letter_classification("KU.02")
            .first_letter_sequence(12, 4)
            .build();
        assert_eq!(first_office_letter(date, &config).unwrap(), "0012/KU.02/XI/2024");
    }
}
