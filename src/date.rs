//! Header date
//!
//! Formats the feed's publication date the way the bulletin's readers
//! write it (`5 sept 2025`). A missing date falls back to today in a fixed
//! UTC offset; nothing here can fail.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Utc};

/// Buenos Aires has no daylight saving time
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -3;

const MONTHS_ES_AR: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Fixed offset from whole hours, falling back to UTC when out of range
pub fn offset_from_hours(hours: i32) -> FixedOffset {
    hours
        .checked_mul(3600)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| {
            tracing::warn!(hours, "UTC offset out of range, using UTC");
            Utc.fix()
        })
}

/// Current calendar date at the given offset
pub fn today_at(now: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
    now.with_timezone(&offset).date_naive()
}

/// Parse `YYYY-MM-DD`, also accepting an RFC 3339 timestamp's date prefix
pub fn parse_fecha(fecha: &str) -> Option<NaiveDate> {
    let fecha = fecha.trim();
    if let Ok(date) = NaiveDate::parse_from_str(fecha, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(fecha)
        .ok()
        .map(|dt| dt.date_naive())
        .or_else(|| {
            fecha
                .get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        })
}

/// `2025-09-05` → `5 sept 2025`
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_ES_AR[date.month0() as usize],
        date.year()
    )
}

/// Display string for the header.
///
/// Blank or missing `fecha` shows `today`; an unparseable value is shown as
/// written.
pub fn display_date(fecha: Option<&str>, today: NaiveDate) -> String {
    match fecha.map(str::trim).filter(|f| !f.is_empty()) {
        None => format_date(today),
        Some(raw) => match parse_fecha(raw) {
            Some(date) => format_date(date),
            None => {
                tracing::warn!(fecha = raw, "unrecognized feed date, showing it verbatim");
                raw.to_string()
            }
        },
    }
}

/// ISO form used in `<time datetime>` attributes
pub fn iso_date(fecha: Option<&str>, today: NaiveDate) -> String {
    fecha
        .and_then(parse_fecha)
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_feed_date() {
        let today = date(2030, 1, 1);
        assert_eq!(display_date(Some("2025-09-05"), today), "5 sept 2025");
        assert_eq!(display_date(Some("2024-01-31"), today), "31 ene 2024");
        assert_eq!(display_date(Some("2024-12-01T09:30:00-03:00"), today), "1 dic 2024");
    }

    #[test]
    fn test_missing_fecha_uses_today() {
        let today = date(2026, 10, 19);
        assert_eq!(display_date(None, today), "19 oct 2026");
        assert_eq!(display_date(Some("   "), today), "19 oct 2026");
        assert_eq!(iso_date(None, today), "2026-10-19");
    }

    #[test]
    fn test_unparseable_fecha_is_verbatim() {
        let today = date(2026, 10, 19);
        assert_eq!(display_date(Some("lunes"), today), "lunes");
        assert_eq!(display_date(Some("2025-13-45"), today), "2025-13-45");
        assert_eq!(iso_date(Some("lunes"), today), "2026-10-19");
    }

    #[test]
    fn test_today_respects_offset() {
        // 01:30 UTC is still the previous day in Buenos Aires
        let now = Utc.with_ymd_and_hms(2025, 9, 6, 1, 30, 0).unwrap();
        let offset = offset_from_hours(DEFAULT_UTC_OFFSET_HOURS);
        assert_eq!(today_at(now, offset), date(2025, 9, 5));
        assert_eq!(today_at(now, offset_from_hours(0)), date(2025, 9, 6));
    }

    #[test]
    fn test_out_of_range_offset_falls_back_to_utc() {
        assert_eq!(offset_from_hours(48).local_minus_utc(), 0);
        assert_eq!(offset_from_hours(1_000_000).local_minus_utc(), 0);
        assert_eq!(offset_from_hours(i32::MIN).local_minus_utc(), 0);
        assert_eq!(offset_from_hours(-3).local_minus_utc(), -3 * 3600);
    }
}
