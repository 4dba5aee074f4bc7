use chrono::NaiveDate;
use faktur::core::*;
use faktur::spj::*;
use rust_decimal_macros::dec;

fn main() {
    // A BOP invoice issued on 15 April for an activity held on 28 March.
    let config = SpjConfigBuilder::new("B07")
        .letter_classification("PK.01.01")
        .invoice_sequence_width(3)
        .build();
    let mut sequences = MemorySequenceStore::starting_at(0, 6);

    let invoice = InvoiceDraft::new(FundSource::Bop)
        .kegiatan("Konsumsi rapat komite sekolah")
        .recipient("Katering Ibu Sari")
        .activity_date(NaiveDate::from_ymd_opt(2025, 3, 28).unwrap())
        .add_item(LineItemBuilder::bop("1", "Nasi kotak", 40, "kotak", dec!(1000000)).build())
        .create(
            NaiveDate::from_ymd_opt(2025, 4, 15)
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            &mut sequences,
            &config,
        );
    let invoice = match invoice {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("Invoice not created: {e}");
            return;
        }
    };

    let letters = match LetterNumberSet::derive(&invoice, &config) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    println!("{:<36} {}", SpjDocument::Faktur.title(), invoice.no_faktur);
    for (document, number) in letters.iter() {
        println!("{:<36} {number}", document.title());
    }

    // Each office letter follows the previous one.
    let next = increment_sequence(&letters.bapb);
    println!();
    println!("Next free office letter: {next}");
}
