//! Date column normalization for loaded records.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::warn;

use drsxml_model::Record;
use drsxml_model::record::{
    END_DAY, END_MONTH, END_YEAR, PUBLICATION_DATE, START_DAY, START_MONTH, START_YEAR,
};

use crate::error::{IngestError, Result};
use crate::spreadsheet::DATETIME_FORMAT;

pub const START_DATE: &str = "start_date";
pub const END_DATE: &str = "end_date";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%d %B %Y"];

/// Parse a date or date-time cell; date-only values resolve to midnight.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Normalize `publication_date` to `YYYY-MM-DD HH:MM:SS` and add `year`,
/// `month` and `day` columns.
///
/// Any unparseable date fails the whole load.
pub fn normalize_book_reviews(records: &mut [Record]) -> Result<()> {
    for (index, record) in records.iter_mut().enumerate() {
        let raw = record.get(PUBLICATION_DATE).to_string();
        let parsed = parse_datetime(&raw).ok_or_else(|| IngestError::InvalidDate {
            column: PUBLICATION_DATE.to_string(),
            value: raw.clone(),
            record: index,
        })?;
        record.insert(PUBLICATION_DATE, parsed.format(DATETIME_FORMAT).to_string());
        record.insert("year", parsed.year().to_string());
        record.insert("month", parsed.month().to_string());
        record.insert("day", parsed.day().to_string());
    }
    Ok(())
}

/// Split `start_date` and `end_date` into zero-padded day and month columns
/// plus year columns.
///
/// Unparseable dates leave the derived columns empty.
pub fn normalize_proceedings(records: &mut [Record]) {
    for (index, record) in records.iter_mut().enumerate() {
        split_into(record, index, START_DATE, START_DAY, START_MONTH, START_YEAR);
        split_into(record, index, END_DATE, END_DAY, END_MONTH, END_YEAR);
    }
}

fn split_into(
    record: &mut Record,
    index: usize,
    source: &str,
    day_key: &str,
    month_key: &str,
    year_key: &str,
) {
    let raw = record.get(source).to_string();
    match parse_datetime(&raw) {
        Some(parsed) => {
            record.insert(day_key, format!("{:02}", parsed.day()));
            record.insert(month_key, format!("{:02}", parsed.month()));
            record.insert(year_key, parsed.year().to_string());
        }
        None => {
            warn!(record = index, column = source, value = %raw, "unparseable conference date");
            record.insert(day_key, "");
            record.insert(month_key, "");
            record.insert(year_key, "");
        }
    }
}
