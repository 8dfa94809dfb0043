use serde::{Deserialize, Serialize};

use crate::record::{
    CONFERENCE_DATES, END_DAY, END_MONTH, END_YEAR, Record, START_DAY, START_MONTH, START_YEAR,
};

/// Collection-level metadata for a proceedings volume.
///
/// Every field is optional in the JSON form and defaults to the empty string.
/// A non-empty `issn` marks the volume as part of a series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionMetadata {
    pub name: String,
    pub acronym: String,
    pub series_title: String,
    pub issn: String,
    pub proceedings_title: String,
    pub isbn: String,
    pub volume_doi: String,
    pub volume_url: String,
    /// Shared event dates. When absent they are taken from the first record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conference_date: Option<ConferenceDates>,
}

impl CollectionMetadata {
    pub fn issn(&self) -> Option<&str> {
        non_blank(&self.issn)
    }

    pub fn isbn(&self) -> Option<&str> {
        non_blank(&self.isbn)
    }

    /// Proceedings title, falling back to the conference name.
    pub fn proceedings_title(&self) -> &str {
        if self.proceedings_title.is_empty() {
            &self.name
        } else {
            &self.proceedings_title
        }
    }
}

/// Start and end dates of a conference, as the string parts Crossref expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConferenceDates {
    pub start_day: String,
    pub start_month: String,
    pub start_year: String,
    pub end_day: String,
    pub end_month: String,
    pub end_year: String,
    /// Human readable form, used as the `conference_date` element text.
    pub text: String,
}

impl ConferenceDates {
    /// Read the date columns of a proceedings record.
    pub fn from_record(record: &Record) -> Self {
        Self {
            start_day: record.get(START_DAY).to_string(),
            start_month: record.get(START_MONTH).to_string(),
            start_year: record.get(START_YEAR).to_string(),
            end_day: record.get(END_DAY).to_string(),
            end_month: record.get(END_MONTH).to_string(),
            end_year: record.get(END_YEAR).to_string(),
            text: record.get(CONFERENCE_DATES).to_string(),
        }
    }
}

/// Left-pad `value` with zeros to two characters.
///
/// Values already two characters or longer are returned unchanged; an empty
/// value becomes `"00"`.
pub fn zero_pad(value: &str) -> String {
    format!("{value:0>2}")
}

fn non_blank(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() { None } else { Some(value) }
}
