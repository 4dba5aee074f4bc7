//! Indonesian calendar helpers: activity-date parsing, Roman month numerals
//! and long-date display strings.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Weekday};
use regex::Regex;
use serde::{Deserialize, Deserializer, de};

/// Indonesian month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

const ROMAN_MONTHS: [&str; 12] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

/// Month-name lookup for free-text dates, lower case.
/// Indonesian full and short forms first, then English spellings.
static MONTH_LOOKUP: &[(&str, u32)] = &[
    ("januari", 1),
    ("jan", 1),
    ("februari", 2),
    ("pebruari", 2),
    ("feb", 2),
    ("maret", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("mei", 5),
    ("juni", 6),
    ("jun", 6),
    ("juli", 7),
    ("jul", 7),
    ("agustus", 8),
    ("agu", 8),
    ("ags", 8),
    ("agt", 8),
    ("september", 9),
    ("sep", 9),
    ("sept", 9),
    ("oktober", 10),
    ("okt", 10),
    ("november", 11),
    ("nov", 11),
    ("nopember", 11),
    ("desember", 12),
    ("des", 12),
    ("january", 1),
    ("february", 2),
    ("march", 3),
    ("may", 5),
    ("june", 6),
    ("july", 7),
    ("august", 8),
    ("aug", 8),
    ("october", 10),
    ("oct", 10),
    ("december", 12),
    ("dec", 12),
];

static TEXT_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})\s+([A-Za-z]+)\.?\s+(\d{4})").expect("valid text date pattern")
});

static NUMERIC_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{4})$").expect("valid numeric date pattern")
});

/// Parse an activity date as stored on an invoice.
///
/// Accepts, in order:
/// - ISO `YYYY-MM-DD`, optionally followed by a time part (`2025-04-15T08:00:00Z`)
/// - Indonesian free text with an optional weekday: `Senin, 25 April 2024`,
///   `25 Agu 2024`
/// - day-first numerals: `15/04/2025`, `15-4-2025`
///
/// Returns `None` when nothing matches or the date does not exist.
///
/// ```
/// use chrono::NaiveDate;
/// use faktur::core::parse_activity_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 4, 25);
/// assert_eq!(parse_activity_date("2024-04-25"), expected);
/// assert_eq!(parse_activity_date("Kamis, 25 April 2024"), expected);
/// ```
pub fn parse_activity_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(iso) = input.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
            return Some(date);
        }
    }

    if let Some(caps) = TEXT_DATE.captures(input) {
        let day: u32 = caps[1].parse().ok()?;
        let month = month_from_name(&caps[2])?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    if let Some(caps) = NUMERIC_DATE.captures(input) {
        let day: u32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let year: i32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    None
}

/// Month number (1-12) for an Indonesian or English month name.
pub fn month_from_name(name: &str) -> Option<u32> {
    let name = name.trim().to_lowercase();
    MONTH_LOOKUP
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, m)| *m)
}

/// Roman numeral for a month (1 → "I", 12 → "XII").
pub fn roman_month(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    ROMAN_MONTHS.get(idx).copied()
}

/// Indonesian month name for a month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(idx).copied()
}

/// Indonesian weekday name.
pub fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

/// `15 April 2025`
pub fn format_date(date: NaiveDate) -> String {
    // month() is always 1..=12
    let month = month_name(date.month()).unwrap_or_default();
    format!("{} {} {}", date.day(), month, date.year())
}

/// `Selasa, 15 April 2025`, the display form stored in `tanggal`.
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{}, {}", day_name(date.weekday()), format_date(date))
}

/// Parse a stored record timestamp.
///
/// Accepts chrono's own `2025-04-15T07:30:00` form, a space instead of the
/// `T`, and RFC 3339 with a `Z` or numeric offset (as written by browsers).
/// Offset timestamps are converted to UTC.
///
/// ```
/// use faktur::core::dates::parse_timestamp;
///
/// let a = parse_timestamp("2025-04-15T07:30:00").unwrap();
/// let b = parse_timestamp("2025-04-15T07:30:00.000Z").unwrap();
/// let c = parse_timestamp("2025-04-15T14:30:00+07:00").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a, c);
/// ```
pub fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if let Ok(dt) = input.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f").ok()
}

/// Serde adapter for [`parse_timestamp`].
pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso() {
        assert_eq!(parse_activity_date("2025-04-15"), Some(date(2025, 4, 15)));
        assert_eq!(
            parse_activity_date("2025-04-15T07:30:00.000Z"),
            Some(date(2025, 4, 15))
        );
    }

    #[test]
    fn parses_indonesian_text() {
        assert_eq!(
            parse_activity_date("Senin, 25 April 2024"),
            Some(date(2024, 4, 25))
        );
        assert_eq!(parse_activity_date("3 Agustus 2023"), Some(date(2023, 8, 3)));
        assert_eq!(parse_activity_date("17 des 2024"), Some(date(2024, 12, 17)));
        assert_eq!(parse_activity_date("1 Nopember 2024"), Some(date(2024, 11, 1)));
    }

    #[test]
    fn parses_day_first_numerals() {
        assert_eq!(parse_activity_date("15/04/2025"), Some(date(2025, 4, 15)));
        assert_eq!(parse_activity_date("5-1-2025"), Some(date(2025, 1, 5)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_activity_date(""), None);
        assert_eq!(parse_activity_date("besok pagi"), None);
        assert_eq!(parse_activity_date("31 Februari 2024"), None);
        assert_eq!(parse_activity_date("12 Foo 2024"), None);
    }

    #[test]
    fn timestamps_in_all_stored_forms() {
        let expected = date(2025, 4, 15).and_hms_opt(7, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2025-04-15T07:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-04-15T07:30:00.000Z"), Some(expected));
        assert_eq!(parse_timestamp("2025-04-15 07:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2025-04-15T14:30:00+07:00"), Some(expected));
        assert_eq!(parse_timestamp("kemarin"), None);
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(roman_month(1), Some("I"));
        assert_eq!(roman_month(4), Some("IV"));
        assert_eq!(roman_month(9), Some("IX"));
        assert_eq!(roman_month(12), Some("XII"));
        assert_eq!(roman_month(0), None);
        assert_eq!(roman_month(13), None);
    }

    #[test]
    fn long_date() {
        assert_eq!(format_long_date(date(2025, 4, 15)), "Selasa, 15 April 2025");
        assert_eq!(format_long_date(date(2024, 4, 25)), "Kamis, 25 April 2024");
        assert_eq!(format_date(date(2024, 8, 1)), "1 Agustus 2024");
    }
}
