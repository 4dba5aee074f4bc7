//! Amounts spelled out in Indonesian ("terbilang"), as written on receipts.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::core::round_rupiah;

const DIGITS: [&str; 12] = [
    "", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
    "sepuluh", "sebelas",
];

const THOUSAND: u128 = 1_000;
const MILLION: u128 = 1_000_000;
const BILLION: u128 = 1_000_000_000;
const TRILLION: u128 = 1_000_000_000_000;

/// Spell an amount in Indonesian words, rounded to whole Rupiah.
///
/// ```
/// use faktur::spj::terbilang;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(terbilang(dec!(1_250_000)), "satu juta dua ratus lima puluh ribu");
/// assert_eq!(terbilang(dec!(0)), "nol");
/// ```
pub fn terbilang(amount: Decimal) -> String {
    let rounded = round_rupiah(amount);
    if rounded.is_zero() {
        return "nol".into();
    }
    let whole = rounded.abs().to_u128().unwrap_or_default();
    let words = spell(whole);
    if rounded.is_sign_negative() {
        format!("minus {words}")
    } else {
        words
    }
}

/// Receipt form: capitalised words followed by "Rupiah".
///
/// `1500` → `Seribu Lima Ratus Rupiah`.
pub fn terbilang_rupiah(amount: Decimal) -> String {
    let words: Vec<String> = terbilang(amount)
        .split(' ')
        .map(capitalize)
        .collect();
    format!("{} Rupiah", words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn spell(n: u128) -> String {
    match n {
        0..=11 => DIGITS[n as usize].to_string(),
        12..=19 => format!("{} belas", DIGITS[(n - 10) as usize]),
        20..=99 => join(format!("{} puluh", DIGITS[(n / 10) as usize]), n % 10),
        100..=199 => join("seratus".into(), n - 100),
        200..=999 => join(format!("{} ratus", DIGITS[(n / 100) as usize]), n % 100),
        1_000..=1_999 => join("seribu".into(), n - THOUSAND),
        2_000..=999_999 => join(format!("{} ribu", spell(n / THOUSAND)), n % THOUSAND),
        1_000_000..=999_999_999 => join(format!("{} juta", spell(n / MILLION)), n % MILLION),
        1_000_000_000..=999_999_999_999 => {
            join(format!("{} miliar", spell(n / BILLION)), n % BILLION)
        }
        _ => join(format!("{} triliun", spell(n / TRILLION)), n % TRILLION),
    }
}

fn join(head: String, rest: u128) -> String {
    if rest == 0 {
        head
    } else {
        format!("{head} {}", spell(rest))
    }
}
