#![cfg(feature = "spj")]

use chrono::NaiveDate;
use faktur::core::*;
use faktur::spj::*;
use rust_decimal_macros::dec;

fn invoice(no_faktur: &str, activity_date: &str, transaction_number: &str) -> Invoice {
    let items = vec![LineItemBuilder::bos("1", "Kertas A4", 10, "rim", dec!(55500)).build()];
    Invoice {
        no_faktur: no_faktur.into(),
        tanggal: "Selasa, 15 April 2025".into(),
        sumber_dana: FundSource::Bos,
        kegiatan: "Pengadaan ATK".into(),
        summary: compute_summary(&items, FundSource::Bos),
        items,
        account_code: "5.2.02.01.01".into(),
        recipient: "CV Cahaya Abadi".into(),
        activity_date: activity_date.into(),
        transaction_number: transaction_number.into(),
        timestamp: NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap(),
    }
}

fn anchor() -> Invoice {
    invoice("HMI.F.20250415001B07", "2025-04-15", "001")
}

// ---------------------------------------------------------------------------
// End-to-end
// ---------------------------------------------------------------------------

#[test]
fn invoice_derived_codes() {
    let letters = generate_letter_numbers(&anchor(), "B07").unwrap();
    assert_eq!(letters.surat_jalan, "HMI.SJ.20250415001B07");
    assert_eq!(letters.bastb, "HMI.BAST.20250415001B07");
    assert_eq!(letters.kwitansi, "HMI.K.20250415001B07");
    assert_eq!(letters.surat_penawaran_1, "HMI.P1.20250415001B07");
    assert_eq!(letters.surat_penawaran_2, "HMI.P2.20250415001B07");
}

#[test]
fn office_letter_chain() {
    let letters = generate_letter_numbers(&anchor(), "B07").unwrap();
    assert_eq!(letters.surat_pesanan, "001/PK.01.01/IV/2025");
    assert_eq!(letters.surat_negosiasi, "002/PK.01.01/IV/2025");
    assert_eq!(letters.surat_bast_nego, "003/PK.01.01/IV/2025");
    assert_eq!(letters.spk, "004/PK.01.01/IV/2025");
    assert_eq!(letters.bapb, "005/PK.01.01/IV/2025");
}

#[test]
fn regeneration_is_deterministic() {
    let inv = anchor();
    let a = generate_letter_numbers(&inv, "B07").unwrap();
    let b = generate_letter_numbers(&inv, "B07").unwrap();
    assert_eq!(a, b);
}

#[test]
fn penawaran_only_swaps_the_tag() {
    let inv = anchor();
    let letters = generate_letter_numbers(&inv, "B07").unwrap();
    assert_eq!(letters.surat_penawaran_1.replacen("P1.", "F.", 1), inv.no_faktur);
    assert_eq!(letters.surat_penawaran_2.replacen("P2.", "F.", 1), inv.no_faktur);
}

#[test]
fn families_use_their_own_dates() {
    // Generated on 15 April, activity in March: office letters follow the
    // activity date, penawaran codes keep the generation date.
    let inv = invoice("HMI.F.20250415001B07", "2025-03-28", "001");
    let letters = generate_letter_numbers(&inv, "B07").unwrap();
    assert_eq!(letters.surat_pesanan, "001/PK.01.01/III/2025");
    assert_eq!(letters.surat_penawaran_1, "HMI.P1.20250415001B07");
    assert_eq!(letters.surat_jalan, "HMI.SJ.20250328001B07");
}

#[test]
fn free_text_activity_date() {
    let inv = invoice("HMI.F.20240425007B07", "Kamis, 25 April 2024", "007");
    let letters = generate_letter_numbers(&inv, "B07").unwrap();
    assert_eq!(letters.surat_jalan, "HMI.SJ.20240425007B07");
    assert_eq!(letters.surat_pesanan, "001/PK.01.01/IV/2024");
}

#[test]
fn school_code_comes_from_caller() {
    let letters = generate_letter_numbers(&anchor(), "C11").unwrap();
    assert_eq!(letters.kwitansi, "HMI.K.20250415001C11");
    // The invoice number already carries its own school code.
    assert_eq!(letters.surat_penawaran_1, "HMI.P1.20250415001B07");
}

#[test]
fn december_letters() {
    let inv = invoice("HMI.F.20241230012B07", "2024-12-30", "012");
    let letters = generate_letter_numbers(&inv, "B07").unwrap();
    assert_eq!(letters.bapb, "005/PK.01.01/XII/2024");
    assert_eq!(letters.bastb, "HMI.BAST.20241230012B07");
}

// ---------------------------------------------------------------------------
// Fallbacks and failures
// ---------------------------------------------------------------------------

#[test]
fn unparseable_activity_date_kept_verbatim() {
    let inv = invoice("HMI.F.20250415001B07", "minggu depan", "001");
    let letters = generate_letter_numbers(&inv, "B07").unwrap();
    assert_eq!(letters.surat_jalan, "HMI.SJ.minggu depan001B07");
    assert_eq!(letters.kwitansi, "HMI.K.minggu depan001B07");
    // Office letters fall back to the generation date in the invoice number.
    assert_eq!(letters.surat_pesanan, "001/PK.01.01/IV/2025");
}

#[test]
fn no_date_anywhere_is_an_error() {
    let inv = invoice("INV-42", "?", "001");
    let err = generate_letter_numbers(&inv, "B07").unwrap_err();
    assert!(matches!(
        err,
        FakturError::LetterNumber {
            document: "suratPesanan",
            ..
        }
    ));
}

#[test]
fn missing_invoice_tag_names_penawaran() {
    let inv = invoice("HMI.X.20250415001B07", "2025-04-15", "001");
    let err = generate_letter_numbers(&inv, "B07").unwrap_err();
    assert!(err.to_string().contains("suratPenawaran1"));
}

#[test]
fn missing_transaction_number_names_surat_jalan() {
    let inv = invoice("HMI.F.20250415001B07", "2025-04-15", "");
    let err = generate_letter_numbers(&inv, "B07").unwrap_err();
    assert!(err.to_string().contains("suratJalan"));
}

// ---------------------------------------------------------------------------
// Access
// ---------------------------------------------------------------------------

#[test]
fn iteration_covers_ten_documents_in_order() {
    let letters = generate_letter_numbers(&anchor(), "B07").unwrap();
    let docs: Vec<SpjDocument> = letters.iter().map(|(d, _)| d).collect();
    assert_eq!(docs.len(), 10);
    assert_eq!(docs[0], SpjDocument::SuratPenawaran1);
    assert_eq!(docs[9], SpjDocument::Kwitansi);
    assert_eq!(letters.get(SpjDocument::Faktur), None);
    assert_eq!(letters.get(SpjDocument::Spk), Some("004/PK.01.01/IV/2025"));
}

#[test]
fn serializes_with_record_keys() {
    let letters = generate_letter_numbers(&anchor(), "B07").unwrap();
    let json = serde_json::to_value(&letters).unwrap();
    assert_eq!(json["suratBASTNego"], "003/PK.01.01/IV/2025");
    assert_eq!(json["suratPenawaran2"], "HMI.P2.20250415001B07");
}

#[test]
fn letter_chain_snapshot() {
    let letters = generate_letter_numbers(&anchor(), "B07").unwrap();
    let rendered = letters
        .iter()
        .map(|(doc, number)| format!("{}: {number}", doc.key()))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!("letter_chain", rendered);
}

// ---------------------------------------------------------------------------
// Template bundle
// ---------------------------------------------------------------------------

#[test]
fn bundle_formats_amounts_and_words() {
    let inv = anchor();
    let bundle = SpjBundle::prepare(&inv, &SpjConfig::default()).unwrap();
    // 10 × 55.500 = 555.000; admin 5% → 527.250
    assert_eq!(bundle.amounts.subtotal, "Rp 555.000");
    assert_eq!(bundle.amounts.administration, "Rp 27.750");
    assert_eq!(bundle.amounts.admin_four_percent.as_deref(), Some("Rp 22.200"));
    assert_eq!(bundle.amounts.total, "Rp 527.250");
    assert_eq!(
        bundle.total_in_words,
        "Lima Ratus Dua Puluh Tujuh Ribu Dua Ratus Lima Puluh Rupiah"
    );
    assert_eq!(bundle.letters.kwitansi, "HMI.K.20250415001B07");
}
