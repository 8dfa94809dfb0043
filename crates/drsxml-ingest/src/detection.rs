//! Record kind detection from column layout.

use std::fmt;

use serde::{Deserialize, Serialize};

use drsxml_model::record::{CONFERENCE_DATES, PUBLICATION_DATE};

use crate::dates::{END_DATE, START_DATE};
use crate::table::SourceTable;

/// Kind of records a source file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordKind {
    /// One review per row, dated by `publication_date`.
    BookReviews,
    /// One conference paper per row with event dates.
    Proceedings,
}

impl RecordKind {
    /// Columns the kind cannot be loaded without.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            RecordKind::BookReviews => &[PUBLICATION_DATE],
            RecordKind::Proceedings => &[START_DATE, END_DATE, CONFERENCE_DATES],
        }
    }

    /// Pick the kind whose required columns are all present.
    ///
    /// Book reviews win when both layouts match.
    pub fn detect(table: &SourceTable) -> Option<Self> {
        [RecordKind::BookReviews, RecordKind::Proceedings]
            .into_iter()
            .find(|kind| kind.missing_column(table).is_none())
    }

    /// First required column absent from `table`.
    pub fn missing_column(self, table: &SourceTable) -> Option<&'static str> {
        self.required_columns()
            .iter()
            .copied()
            .find(|column| !table.has_column(column))
    }

    pub const fn label(self) -> &'static str {
        match self {
            RecordKind::BookReviews => "book reviews",
            RecordKind::Proceedings => "proceedings",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str]) -> SourceTable {
        SourceTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    #[test]
    fn detects_book_reviews() {
        let kind = RecordKind::detect(&table(&["title", "publication_date", "doi"]));
        assert_eq!(kind, Some(RecordKind::BookReviews));
    }

    #[test]
    fn detects_proceedings() {
        let kind = RecordKind::detect(&table(&[
            "title",
            "start_date",
            "end_date",
            "conference_dates",
        ]));
        assert_eq!(kind, Some(RecordKind::Proceedings));
    }

    #[test]
    fn partial_proceedings_layout_is_unknown() {
        let layout = table(&["title", "start_date", "conference_dates"]);
        assert_eq!(RecordKind::detect(&layout), None);
        assert_eq!(
            RecordKind::Proceedings.missing_column(&layout),
            Some("end_date")
        );
    }
}
