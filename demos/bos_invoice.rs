use chrono::NaiveDate;
use faktur::core::*;
use faktur::spj::SpjBundle;
use rust_decimal_macros::dec;

fn main() {
    let config = SpjConfig::default();
    let mut sequences = MemorySequenceStore::new();

    // A BOS purchase: unit prices are entered, totals are derived.
    let draft = InvoiceDraft::new(FundSource::Bos)
        .kegiatan("Pengadaan alat tulis kantor semester genap")
        .recipient("CV Cahaya Abadi")
        .account_code("5.2.02.01.01")
        .activity_date(NaiveDate::from_ymd_opt(2025, 4, 10).unwrap())
        .add_item(
            LineItemBuilder::bos("1", "Kertas A4 80gr", 10, "rim", dec!(55500))
                .ppn()
                .build(),
        )
        .add_item(
            LineItemBuilder::bos("2", "Jasa servis laptop", 1, "unit", dec!(222000))
                .ppn()
                .pph(PphRate::TwoPercent)
                .build(),
        )
        .add_item(LineItemBuilder::bos("3", "Materai 10000", 5, "lembar", dec!(10000)).build());

    for error in draft.validate() {
        eprintln!("{error}");
    }

    let issued_at = NaiveDate::from_ymd_opt(2025, 4, 15)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let invoice = match draft.create(issued_at, &mut sequences, &config) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("Invoice not created: {e}");
            return;
        }
    };

    println!("{}  ({})", invoice.no_faktur, invoice.tanggal);
    println!("Sumber dana: {}  Kegiatan: {}", invoice.sumber_dana, invoice.kegiatan);
    println!();
    for item in &invoice.items {
        println!(
            "  {:<22} {:>3} {:<7} {:>14} {:>14}",
            item.name,
            item.quantity,
            item.unit,
            format_rupiah(item.total_price),
            format_rupiah(item.netto),
        );
    }

    let bundle = match SpjBundle::prepare(&invoice, &config) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("SPJ numbers unavailable: {e}");
            return;
        }
    };
    let a = &bundle.amounts;
    println!();
    println!("Subtotal:        {}", a.subtotal);
    println!("PPN:             {}", a.total_ppn);
    println!("PPh:             {}", a.total_pph);
    println!("Netto:           {}", a.total_netto);
    if let (Some(four), Some(one)) = (&a.admin_four_percent, &a.admin_one_percent) {
        println!("Administrasi 4%: {four}");
        println!("Administrasi 1%: {one}");
    }
    println!("Administrasi:    {}", a.administration);
    println!("Total:           {}", a.total);
    println!("Terbilang:       {}", bundle.total_in_words);
}
