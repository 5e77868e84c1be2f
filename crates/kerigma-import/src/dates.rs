//! Birth date parsing for loosely formatted spreadsheet values.
//!
//! Congregation spreadsheets carry dates in whatever shape the author's
//! locale produced. Parsing is best-effort by design: a value nobody can
//! read becomes `None`, never a row error, because losing a birth date is
//! preferable to losing the person.
//!
//! Priority order:
//! 1. ISO `YYYY-MM-DD` (shape-checked, then calendar-validated)
//! 2. Brazilian day-first `D/M/Y`, `D-M-Y`, `D.M.Y` with a 2- or 4-digit
//!    year; 2-digit years below 50 land in the 2000s, the rest in the 1900s
//! 3. A short list of fallback formats seen in exports

use chrono::{NaiveDate, NaiveDateTime};

/// Output format for accepted dates.
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Separators accepted in day-first dates.
const DMY_SEPARATORS: [char; 3] = ['/', '-', '.'];

const FALLBACK_DATE_FORMATS: &[&str] = &["%Y/%m/%d", "%d %m %Y"];
const FALLBACK_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a birth date out of a raw cell, if possible.
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if is_iso_shape(value)
        && let Ok(date) = NaiveDate::parse_from_str(value, ISO_DATE)
    {
        return Some(date);
    }
    parse_day_month_year(value).or_else(|| parse_fallback(value))
}

/// `\d{4}-\d{2}-\d{2}` without pulling in a regex engine.
fn is_iso_shape(value: &str) -> bool {
    value.len() == 10
        && value.chars().enumerate().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        })
}

fn parse_day_month_year(value: &str) -> Option<NaiveDate> {
    let separator = DMY_SEPARATORS
        .iter()
        .copied()
        .find(|&sep| value.contains(sep))?;
    let parts: Vec<&str> = value.split(separator).collect();
    if parts.len() != 3 {
        return None;
    }
    let day: u32 = parts[0].trim().parse().ok()?;
    let month: u32 = parts[1].trim().parse().ok()?;
    let year_part = parts[2].trim();
    let year: i32 = match year_part.len() {
        2 => {
            let short: i32 = year_part.parse().ok()?;
            if short < 50 { 2000 + short } else { 1900 + short }
        }
        4 => year_part.parse().ok()?,
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_fallback(value: &str) -> Option<NaiveDate> {
    for format in FALLBACK_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    for format in FALLBACK_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(raw: &str) -> Option<String> {
        parse_birth_date(raw).map(|date| date.format(ISO_DATE).to_string())
    }

    #[test]
    fn test_iso_passthrough() {
        assert_eq!(iso("1990-05-10").as_deref(), Some("1990-05-10"));
        assert_eq!(iso("  2001-12-31  ").as_deref(), Some("2001-12-31"));
    }

    #[test]
    fn test_day_first_formats() {
        assert_eq!(iso("10/05/1990").as_deref(), Some("1990-05-10"));
        assert_eq!(iso("10-05-1990").as_deref(), Some("1990-05-10"));
        assert_eq!(iso("10.05.1990").as_deref(), Some("1990-05-10"));
    }

    #[test]
    fn test_two_digit_year_pivot() {
        // >= 50 lands in the 1900s
        assert_eq!(iso("10-05-90").as_deref(), Some("1990-05-10"));
        assert_eq!(iso("01/01/50").as_deref(), Some("1950-01-01"));
        // < 50 lands in the 2000s
        assert_eq!(iso("05/10/05").as_deref(), Some("2005-10-05"));
        assert_eq!(iso("31/12/49").as_deref(), Some("2049-12-31"));
    }

    #[test]
    fn test_invalid_dates_become_none() {
        assert_eq!(iso("not-a-date"), None);
        assert_eq!(iso(""), None);
        assert_eq!(iso("32/01/1990"), None);
        assert_eq!(iso("10/13/1990"), None);
        // ISO-shaped but impossible on the calendar
        assert_eq!(iso("1990-13-40"), None);
        assert_eq!(iso("10/05"), None);
        assert_eq!(iso("10/05/199"), None);
    }

    #[test]
    fn test_fallback_formats() {
        assert_eq!(iso("1990/05/10").as_deref(), Some("1990-05-10"));
        assert_eq!(iso("1990-05-10T00:00:00").as_deref(), Some("1990-05-10"));
        assert_eq!(iso("1990-05-10 08:30:00").as_deref(), Some("1990-05-10"));
    }

    #[test]
    fn test_short_year_never_misreads_as_iso() {
        // Day-first with a dash separator must not be read year-first
        assert_eq!(iso("10-05-19").as_deref(), Some("2019-05-10"));
    }
}
