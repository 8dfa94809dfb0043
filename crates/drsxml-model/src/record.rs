use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Column holding the article title.
pub const TITLE: &str = "title";
/// Column holding the registered DOI.
pub const DOI: &str = "doi";
/// Column holding the resource URL the DOI resolves to.
pub const RESOURCE_URL: &str = "calc_url";
/// Book review publication date (`YYYY-MM-DD[ HH:MM:SS]`).
pub const PUBLICATION_DATE: &str = "publication_date";
/// Free-text conference dates, e.g. "25-28 June 2024".
pub const CONFERENCE_DATES: &str = "conference_dates";
pub const START_DAY: &str = "start_day";
pub const START_MONTH: &str = "start_month";
pub const START_YEAR: &str = "start_year";
pub const END_DAY: &str = "end_day";
pub const END_MONTH: &str = "end_month";
pub const END_YEAR: &str = "end_year";

/// One normalized row of source data.
///
/// Every value is a string. Reading a column that is not present yields the
/// empty string, so builders never have to distinguish "missing" from "blank".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of `key`, or `""` when the column is absent.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn title(&self) -> &str {
        self.get(TITLE)
    }

    pub fn doi(&self) -> &str {
        self.get(DOI)
    }

    pub fn resource_url(&self) -> &str {
        self.get(RESOURCE_URL)
    }

    /// Authors in slot order, starting at `author1_*`.
    ///
    /// Enumeration stops at the first slot whose surname is blank: a record
    /// with authors in slots 1 and 3 but not 2 yields only the first author.
    pub fn authors(&self) -> Vec<Author> {
        (1..)
            .map_while(|index| Author::from_slot(self, index))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Typed view over one `author{N}_*` column group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// 1-based slot number.
    pub index: usize,
    pub given_name: Option<String>,
    pub surname: String,
    pub institution: Option<String>,
}

impl Author {
    /// Read slot `index` from `record`; `None` when the surname is blank.
    pub fn from_slot(record: &Record, index: usize) -> Option<Self> {
        let surname = record.get(&author_key(index, "lname")).trim();
        if surname.is_empty() {
            return None;
        }
        Some(Self {
            index,
            given_name: non_empty(record.get(&author_key(index, "fname"))),
            surname: surname.to_string(),
            institution: non_empty(record.get(&author_key(index, "institution"))),
        })
    }

    pub fn is_first(&self) -> bool {
        self.index == 1
    }
}

/// Column name for one field of an author slot, e.g. `author2_lname`.
pub fn author_key(index: usize, field: &str) -> String {
    format!("author{index}_{field}")
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
