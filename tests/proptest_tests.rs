//! Property-based tests for the summary engine and document numbering.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(feature = "spj")]

use chrono::{Datelike, NaiveDate};
use faktur::core::*;
use faktur::spj::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn arb_fund() -> impl Strategy<Value = FundSource> {
    prop_oneof![Just(FundSource::Bos), Just(FundSource::Bop)]
}

/// Whole Rupiah, 1 to 50 million.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (1i64..=50_000_000i64).prop_map(Decimal::from)
}

fn arb_pph() -> impl Strategy<Value = Option<PphRate>> {
    prop_oneof![
        Just(None),
        Just(Some(PphRate::HalfPercent)),
        Just(Some(PphRate::OneAndHalfPercent)),
        Just(Some(PphRate::TwoPercent)),
    ]
}

/// 0 to 8 items priced the way `fund` enters them.
fn arb_items(fund: FundSource) -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec((1i64..=500, arb_price(), any::<bool>(), arb_pph()), 0..=8).prop_map(
        move |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (qty, price, ppn, pph))| {
                    let mut b = LineItemBuilder::new(
                        fund,
                        format!("{}", i + 1),
                        format!("Barang {}", i + 1),
                        qty,
                        "pcs",
                        price,
                    );
                    if ppn {
                        b = b.ppn();
                    }
                    if let Some(rate) = pph {
                        b = b.pph(rate);
                    }
                    b.build()
                })
                .collect()
        },
    )
}

fn arb_funded_items() -> impl Strategy<Value = (FundSource, Vec<LineItem>)> {
    arb_fund().prop_flat_map(|fund| (Just(fund), arb_items(fund)))
}

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..=2035, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    /// The school's share is what is left of netto after administration.
    #[test]
    fn total_is_netto_minus_administration((fund, items) in arb_funded_items()) {
        let s = compute_summary(&items, fund);
        prop_assert_eq!(s.total, s.sekolah_amount);
        prop_assert_eq!(s.total, s.total_netto - s.administration);
    }

    #[test]
    fn subtotal_is_sum_of_line_totals((fund, items) in arb_funded_items()) {
        let s = compute_summary(&items, fund);
        let sum: Decimal = items.iter().map(|i| i.total_price).sum();
        prop_assert_eq!(s.subtotal, sum);
    }

    #[test]
    fn bos_administration_is_split(items in arb_items(FundSource::Bos)) {
        let s = compute_summary(&items, FundSource::Bos);
        let four = s.admin_four_percent.unwrap();
        let one = s.admin_one_percent.unwrap();
        prop_assert_eq!(s.administration, four + one);
    }

    #[test]
    fn bop_has_no_split(items in arb_items(FundSource::Bop)) {
        let s = compute_summary(&items, FundSource::Bop);
        prop_assert!(s.admin_four_percent.is_none());
        prop_assert!(s.admin_one_percent.is_none());
    }

    /// Recalculating an already-priced list changes nothing.
    #[test]
    fn recalculation_is_idempotent((fund, items) in arb_funded_items()) {
        let mut once = items.clone();
        let first = recalculate_items(&mut once, fund);
        let mut twice = once.clone();
        let second = recalculate_items(&mut twice, fund);
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(first, second);
    }

    /// PPN of a multiple of 111 is exactly 11 per 111.
    #[test]
    fn ppn_of_multiple_of_111(k in 1i64..=10_000_000) {
        let total = Decimal::from(k * 111);
        prop_assert_eq!(calculate_ppn(total), Decimal::from(k * 11));
    }

    #[test]
    fn penawaran_is_the_invoice_number_retagged(date in arb_date(), seq in 1u32..=9_999) {
        let items = vec![LineItemBuilder::bos("1", "Buku tulis", 1, "pak", Decimal::from(1000)).build()];
        let invoice = Invoice {
            no_faktur: generate_invoice_number(date, seq, "B07"),
            tanggal: format_long_date(date),
            sumber_dana: FundSource::Bos,
            kegiatan: "Pengadaan ATK".into(),
            summary: compute_summary(&items, FundSource::Bos),
            items,
            account_code: String::new(),
            recipient: "Toko Buku".into(),
            activity_date: date.format("%Y-%m-%d").to_string(),
            transaction_number: TransactionNumber(seq).to_string(),
            timestamp: date.and_hms_opt(10, 0, 0).unwrap(),
        };
        let letters = generate_letter_numbers(&invoice, "B07").unwrap();
        prop_assert_eq!(letters.surat_penawaran_1, invoice.no_faktur.replacen("F.", "P1.", 1));
        prop_assert_eq!(letters.surat_penawaran_2, invoice.no_faktur.replacen("F.", "P2.", 1));
        let roman = roman_month(date.month()).unwrap();
        prop_assert!(letters.bapb.starts_with("005/"));
        let expected_suffix = format!("/{roman}/{}", date.format("%Y"));
        prop_assert!(letters.bapb.ends_with(&expected_suffix));
    }

    /// The leading counter goes up by one and never gets narrower.
    #[test]
    fn increment_keeps_width(n in 0u64..1_000_000, width in 1usize..=6) {
        let number = format!("{n:0width$}/PK.01.01/IV/2025");
        let next = increment_sequence(&number);
        let (head, rest) = next.split_once('/').unwrap();
        prop_assert_eq!(rest, "PK.01.01/IV/2025");
        prop_assert_eq!(head.parse::<u64>().unwrap(), n + 1);
        let original_width = number.split_once('/').unwrap().0.len();
        prop_assert_eq!(head.len(), original_width.max((n + 1).to_string().len()));
    }

    /// Free-text parsing never panics.
    #[test]
    fn activity_date_parser_total(s in "\\PC{0,40}") {
        let _ = parse_activity_date(&s);
    }
}
