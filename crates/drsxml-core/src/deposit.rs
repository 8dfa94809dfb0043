//! Body shapes and the single entry point that assembles a batch.

use std::fmt;

use tracing::{info, info_span};

use drsxml_model::{CollectionMetadata, DepositorConfig, Element, Record, Result};

use crate::book_review::populate_book_review_body;
use crate::clock::Clock;
use crate::head::populate_head;
use crate::proceedings::{Proceedings, VolumeKind, populate_proceedings_body};
use crate::root::DoiBatch;

/// What a batch body contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deposit {
    /// One `report-paper` per record.
    BookReviews(Vec<Record>),
    /// A standalone proceedings volume.
    Proceedings(Proceedings),
    /// A proceedings volume published in an ISSN-bearing series.
    ///
    /// Built by [`Deposit::proceedings`]; the body still follows the ISSN, so
    /// a hand-built series deposit without one renders as a single volume.
    ProceedingsSeries(Proceedings),
}

impl Deposit {
    pub fn book_reviews(records: Vec<Record>) -> Self {
        Deposit::BookReviews(records)
    }

    /// Proceedings deposit; the ISSN of `collection` selects the series shape.
    pub fn proceedings(collection: CollectionMetadata, records: Vec<Record>) -> Result<Self> {
        let proceedings = Proceedings::new(collection, records)?;
        Ok(match proceedings.volume_kind() {
            VolumeKind::Single => Deposit::Proceedings(proceedings),
            VolumeKind::Series => Deposit::ProceedingsSeries(proceedings),
        })
    }

    pub fn records(&self) -> &[Record] {
        match self {
            Deposit::BookReviews(records) => records,
            Deposit::Proceedings(proceedings) | Deposit::ProceedingsSeries(proceedings) => {
                proceedings.records()
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Deposit::BookReviews(_) => "book reviews",
            Deposit::Proceedings(proceedings) | Deposit::ProceedingsSeries(proceedings) => {
                match proceedings.volume_kind() {
                    VolumeKind::Single => "proceedings",
                    VolumeKind::Series => "proceedings (series)",
                }
            }
        }
    }
}

impl fmt::Display for Deposit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fill `body` according to the deposit shape.
pub fn populate_body(body: &mut Element, deposit: &Deposit, config: &DepositorConfig) -> Result<()> {
    match deposit {
        Deposit::BookReviews(records) => populate_book_review_body(body, records),
        Deposit::Proceedings(proceedings) | Deposit::ProceedingsSeries(proceedings) => {
            populate_proceedings_body(body, proceedings, config)
        }
    }
}

/// Assemble a complete `doi_batch` for `deposit`.
///
/// `source_name` is the input file name; its stem becomes the batch id prefix.
pub fn build_doi_batch(
    deposit: &Deposit,
    source_name: &str,
    config: &DepositorConfig,
    clock: &dyn Clock,
) -> Result<DoiBatch> {
    let span = info_span!("assemble", kind = deposit.label(), source = source_name);
    let _guard = span.enter();

    let mut batch = DoiBatch::new();
    populate_head(&mut batch.head, source_name, config, clock);
    populate_body(&mut batch.body, deposit, config)?;
    info!(records = deposit.records().len(), "assembled doi_batch");
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2025, 1, 31)
                .and_then(|d| d.and_hms_opt(23, 59, 59))
                .expect("valid"),
        )
    }

    fn paper() -> Record {
        Record::from_iter([
            ("title", "Paper"),
            ("author1_lname", "Author"),
            ("start_day", "02"),
            ("start_month", "09"),
            ("start_year", "2024"),
        ])
    }

    #[test]
    fn issn_selects_series_shape() {
        let single = Deposit::proceedings(CollectionMetadata::default(), vec![paper()])
            .expect("single");
        assert!(matches!(single, Deposit::Proceedings(_)));

        let series = Deposit::proceedings(
            CollectionMetadata {
                issn: "1234-5678".to_string(),
                ..CollectionMetadata::default()
            },
            vec![paper()],
        )
        .expect("series");
        assert!(matches!(series, Deposit::ProceedingsSeries(_)));
        assert_eq!(series.label(), "proceedings (series)");
    }

    #[test]
    fn builds_full_batch() {
        let deposit = Deposit::book_reviews(vec![Record::from_iter([
            ("title", "Review"),
            ("publication_date", "2024-12-01 00:00:00"),
        ])]);
        let batch = build_doi_batch(
            &deposit,
            "reviews.xlsx",
            &DepositorConfig::default(),
            &clock(),
        )
        .expect("batch");
        assert_eq!(batch.head.find_text("doi_batch_id"), Some("reviews-250131"));
        assert_eq!(batch.head.find_text("timestamp"), Some("202501312359590000"));
        assert_eq!(batch.body.children_named("report-paper").count(), 1);
    }

    #[test]
    fn body_errors_propagate() {
        let deposit = Deposit::book_reviews(vec![Record::from_iter([(
            "publication_date",
            "not a date",
        )])]);
        let result = build_doi_batch(&deposit, "x.csv", &DepositorConfig::default(), &clock());
        assert!(result.is_err());
    }

    #[test]
    fn series_variant_without_issn_renders_single_volume() {
        let proceedings =
            Proceedings::new(CollectionMetadata::default(), vec![paper()]).expect("proceedings");
        let deposit = Deposit::ProceedingsSeries(proceedings);
        assert_eq!(deposit.label(), "proceedings");
        let mut body = Element::new("body");
        populate_body(&mut body, &deposit, &DepositorConfig::default()).expect("body");
        let conference = body.child("conference").expect("conference");
        assert!(conference.child("proceedings_metadata").is_some());
        assert!(conference.child("proceedings_series_metadata").is_none());
    }
}
