//! Source date parsing and canonical ISO 8601 annotation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use vitae_shared::{ISO_8601_SUFFIX, Record, Result, VitaeError};

/// Format of every date column in the data files (`DD.MM.YY`).
pub const SOURCE_DATE_FORMAT: &str = "%d.%m.%y";

/// Canonical form: midnight of the source date, without offset.
pub const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a `DD.MM.YY` value of column `field` as midnight on that day.
///
/// Two-digit years 69-99 fall in the 1900s, 00-68 in the 2000s (the POSIX
/// `strptime` pivot).
pub fn parse_source_date(field: &str, value: &str) -> Result<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(value, SOURCE_DATE_FORMAT).map_err(|source| {
        VitaeError::Date {
            field: field.to_string(),
            value: value.to_string(),
            source,
        }
    })?;
    Ok(posix_century(date, field)?.and_time(NaiveTime::MIN))
}

/// chrono pivots `%y` at 70; POSIX pivots at 69.
fn posix_century(date: NaiveDate, field: &str) -> Result<NaiveDate> {
    if date.year() != 2069 {
        return Ok(date);
    }
    date.with_year(1969)
        .ok_or_else(|| VitaeError::parse(format!("{field}: {date} has no 1969 equivalent")))
}

/// Render a date-time in canonical form.
pub fn to_iso_8601(at: &NaiveDateTime) -> String {
    at.format(ISO_8601_FORMAT).to_string()
}

/// Name of the derived column holding the canonical form of `field`.
pub fn iso_field_name(field: &str) -> String {
    format!("{field}{ISO_8601_SUFFIX}")
}

/// Parse `field` of `record` and store the canonical form beside it.
pub fn annotate_date(record: &mut Record, field: &str) -> Result<NaiveDateTime> {
    let at = parse_source_date(field, record.require(field)?)?;
    record.set(iso_field_name(field), to_iso_8601(&at));
    Ok(at)
}
