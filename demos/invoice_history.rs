use chrono::NaiveDate;
use faktur::core::*;
use faktur::store::*;
use rust_decimal_macros::dec;

fn main() -> Result<(), FakturError> {
    let dir = std::env::temp_dir().join("faktur-demo");
    let mut sequences = JsonSequenceStore::new(dir.join("sequences.json"));
    let mut invoices = JsonInvoiceStore::new(dir.join("invoices.json"));
    let config = SpjConfig::default();

    let purchases = [
        (FundSource::Bos, "Buku paket kelas 5", 3, dec!(85000), 7),
        (FundSource::Bop, "Sewa tenda wisuda", 1, dec!(1500000), 7),
        (FundSource::Bos, "Tinta printer", 4, dec!(95000), 11),
    ];
    for (fund, name, qty, price, day) in purchases {
        let date = NaiveDate::from_ymd_opt(2025, 5, day).unwrap();
        let draft = InvoiceDraft::new(fund)
            .kegiatan(name)
            .recipient("Toko Sinar Jaya")
            .activity_date(date)
            .add_item(LineItemBuilder::new(fund, "1", name, qty, "pcs", price).build());
        issue_invoice(
            draft,
            date.and_hms_opt(10, 0, 0).unwrap(),
            &mut sequences,
            &mut invoices,
            &config,
        )?;
    }

    println!("All invoices, newest first:");
    for inv in history(&invoices, None)? {
        println!(
            "  {:<22} {} {:>16}  {}",
            inv.no_faktur,
            inv.sumber_dana,
            format_rupiah(inv.summary.total),
            inv.kegiatan
        );
    }

    println!("BOS only:");
    for inv in history(&invoices, Some(FundSource::Bos))? {
        println!("  {:<22} {}", inv.no_faktur, inv.tanggal);
    }

    println!(
        "Next BOS transaction: {:03}",
        sequences.peek(FundSource::Bos)? + 1
    );
    Ok(())
}
