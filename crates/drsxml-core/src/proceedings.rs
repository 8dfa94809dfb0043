//! `conference` bodies for proceedings volumes.

use tracing::debug;

use drsxml_model::record::{START_DAY, START_MONTH, START_YEAR};
use drsxml_model::{
    CollectionMetadata, ConferenceDates, DepositError, DepositorConfig, Element, Record, Result,
    zero_pad,
};

use crate::contributors::add_contributors;
use crate::doi::add_doi_data;

/// Everything needed to build a proceedings body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proceedings {
    collection: CollectionMetadata,
    /// Event dates shared by every paper in the volume.
    dates: ConferenceDates,
    records: Vec<Record>,
}

impl Proceedings {
    /// Combine collection metadata with the papers of one volume.
    ///
    /// Event dates come from `collection.conference_date` when set, otherwise
    /// from the first record.
    pub fn new(collection: CollectionMetadata, records: Vec<Record>) -> Result<Self> {
        let dates = match &collection.conference_date {
            Some(dates) => dates.clone(),
            None => records
                .first()
                .map(ConferenceDates::from_record)
                .ok_or(DepositError::EmptyProceedings)?,
        };
        if records.is_empty() {
            return Err(DepositError::EmptyProceedings);
        }
        Ok(Self {
            collection,
            dates,
            records,
        })
    }

    pub fn collection(&self) -> &CollectionMetadata {
        &self.collection
    }

    pub fn dates(&self) -> &ConferenceDates {
        &self.dates
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Volume block the collection calls for; series only with an ISSN.
    pub fn volume_kind(&self) -> VolumeKind {
        VolumeKind::for_collection(&self.collection)
    }
}

/// Which metadata block describes the volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeKind {
    /// Standalone volume: `proceedings_metadata`.
    Single,
    /// Volume in an ISSN-bearing series: `proceedings_series_metadata`.
    Series,
}

impl VolumeKind {
    pub fn for_collection(collection: &CollectionMetadata) -> Self {
        if collection.issn().is_some() {
            VolumeKind::Series
        } else {
            VolumeKind::Single
        }
    }
}

/// Append a `conference` element with event metadata, volume metadata and one
/// `conference_paper` per record.
///
/// The volume block follows the collection ISSN: `proceedings_series_metadata`
/// when it is set, `proceedings_metadata` otherwise.
pub fn populate_proceedings_body(
    body: &mut Element,
    proceedings: &Proceedings,
    config: &DepositorConfig,
) -> Result<()> {
    if proceedings.records.is_empty() {
        return Err(DepositError::EmptyProceedings);
    }
    let conference = body.add_child("conference");
    add_event_metadata(conference, &proceedings.collection, &proceedings.dates);
    add_volume_metadata(
        conference,
        &proceedings.collection,
        &proceedings.dates,
        proceedings.volume_kind(),
        config,
    );
    for (index, record) in proceedings.records.iter().enumerate() {
        debug!(record = index, title = record.title(), "adding conference paper");
        conference.push(conference_paper(record));
    }
    Ok(())
}

fn add_event_metadata(
    conference: &mut Element,
    collection: &CollectionMetadata,
    dates: &ConferenceDates,
) {
    let event = conference.add_child("event_metadata");
    event.add_text_child("conference_name", collection.name.as_str());
    event.add_text_child("conference_acronym", collection.acronym.as_str());
    event.push(
        Element::new("conference_date")
            .with_attr("start_day", zero_pad(&dates.start_day))
            .with_attr("end_day", zero_pad(&dates.end_day))
            .with_attr("start_month", zero_pad(&dates.start_month))
            .with_attr("end_month", zero_pad(&dates.end_month))
            .with_attr("start_year", dates.start_year.as_str())
            .with_attr("end_year", dates.end_year.as_str())
            .with_text(dates.text.as_str()),
    );
}

fn add_volume_metadata(
    conference: &mut Element,
    collection: &CollectionMetadata,
    dates: &ConferenceDates,
    kind: VolumeKind,
    config: &DepositorConfig,
) {
    let volume = match kind {
        VolumeKind::Single => {
            let volume = conference.add_child("proceedings_metadata");
            volume.set_attr("language", "en");
            volume
        }
        VolumeKind::Series => {
            let volume = conference.add_child("proceedings_series_metadata");
            add_series_metadata(volume, collection);
            volume
        }
    };

    volume.add_text_child("proceedings_title", collection.proceedings_title());
    volume
        .add_child("publisher")
        .add_text_child("publisher_name", config.publisher_name.as_str());
    volume.push(online_date(
        &dates.start_month,
        &dates.start_day,
        &dates.start_year,
    ));

    match collection.isbn() {
        Some(isbn) => {
            volume.add_text_child("isbn", isbn);
        }
        None => {
            volume.add_child("noisbn").set_attr("reason", "simple_series");
        }
    }

    add_doi_data(volume, &collection.volume_doi, &collection.volume_url);
}

fn add_series_metadata(parent: &mut Element, collection: &CollectionMetadata) {
    let series = parent.add_child("series_metadata");
    series
        .add_child("titles")
        .add_text_child("title", collection.series_title.as_str());
    if let Some(issn) = collection.issn() {
        series.add_text_child("issn", issn);
    }
}

fn conference_paper(record: &Record) -> Element {
    let mut paper = Element::new("conference_paper")
        .with_attr("language", "en")
        .with_attr("publication_type", "full_text");
    add_contributors(&mut paper, record);
    paper
        .add_child("titles")
        .add_text_child("title", record.title());
    paper.push(online_date(
        record.get(START_MONTH),
        record.get(START_DAY),
        record.get(START_YEAR),
    ));
    add_doi_data(&mut paper, record.doi(), record.resource_url());
    paper
}

/// `publication_date media_type="online"` in month, day, year order.
fn online_date(month: &str, day: &str, year: &str) -> Element {
    let mut date = Element::new("publication_date").with_attr("media_type", "online");
    date.add_text_child("month", month);
    date.add_text_child("day", day);
    date.add_text_child("year", year);
    date
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str, day: &str) -> Record {
        Record::from_iter([
            ("title", title),
            ("doi", "10.21606/drs.2024.100"),
            ("calc_url", "https://dl.designresearchsociety.org/drs-conference-papers/drs2024/1"),
            ("author1_lname", "Lovelace"),
            ("start_day", day),
            ("start_month", "6"),
            ("start_year", "2024"),
            ("end_day", "28"),
            ("end_month", "6"),
            ("end_year", "2024"),
            ("conference_dates", "23-28 June 2024"),
        ])
    }

    fn collection() -> CollectionMetadata {
        CollectionMetadata {
            name: "DRS2024: Boston".to_string(),
            acronym: "DRS2024".to_string(),
            volume_doi: "10.21606/drs.2024".to_string(),
            volume_url: "https://dl.designresearchsociety.org/drs2024".to_string(),
            ..CollectionMetadata::default()
        }
    }

    fn build(collection: CollectionMetadata, records: Vec<Record>) -> Element {
        let proceedings = Proceedings::new(collection, records).expect("proceedings");
        let mut body = Element::new("body");
        populate_proceedings_body(&mut body, &proceedings, &DepositorConfig::default())
            .expect("build");
        body
    }

    #[test]
    fn event_metadata_uses_first_record_dates() {
        let body = build(collection(), vec![paper("A", "23"), paper("B", "24")]);
        let date = body
            .find("conference/event_metadata/conference_date")
            .expect("conference_date");
        assert_eq!(date.attr("start_day"), Some("23"));
        assert_eq!(date.attr("start_month"), Some("06"));
        assert_eq!(date.attr("end_month"), Some("06"));
        assert_eq!(date.attr("start_year"), Some("2024"));
        assert_eq!(date.text(), Some("23-28 June 2024"));
        assert_eq!(
            body.find_text("conference/event_metadata/conference_acronym"),
            Some("DRS2024")
        );
    }

    #[test]
    fn explicit_conference_dates_win() {
        let mut meta = collection();
        meta.conference_date = Some(ConferenceDates {
            start_day: "1".to_string(),
            start_month: "7".to_string(),
            start_year: "2025".to_string(),
            end_day: "3".to_string(),
            end_month: "7".to_string(),
            end_year: "2025".to_string(),
            text: "1-3 July 2025".to_string(),
        });
        let body = build(meta, vec![paper("A", "23")]);
        let date = body
            .find("conference/event_metadata/conference_date")
            .expect("conference_date");
        assert_eq!(date.attr("start_day"), Some("01"));
        assert_eq!(date.text(), Some("1-3 July 2025"));
        assert_eq!(
            body.find_text("conference/proceedings_metadata/publication_date/year"),
            Some("2025")
        );
    }

    #[test]
    fn no_issn_uses_proceedings_metadata_and_noisbn() {
        let body = build(collection(), vec![paper("A", "23")]);
        let conference = body.child("conference").expect("conference");
        assert!(conference.child("proceedings_series_metadata").is_none());
        let volume = conference.child("proceedings_metadata").expect("volume");
        assert_eq!(volume.attr("language"), Some("en"));
        assert_eq!(volume.find_text("proceedings_title"), Some("DRS2024: Boston"));
        assert_eq!(
            volume.find_text("publisher/publisher_name"),
            Some("Design Research Society")
        );
        assert!(volume.child("isbn").is_none());
        assert_eq!(
            volume.child("noisbn").and_then(|e| e.attr("reason")),
            Some("simple_series")
        );
        assert_eq!(volume.find_text("doi_data/doi"), Some("10.21606/drs.2024"));
    }

    #[test]
    fn issn_switches_to_series_metadata() {
        let mut meta = collection();
        meta.issn = "1234-5678".to_string();
        meta.series_title = "DRS Conference Proceedings".to_string();
        meta.isbn = "978-1-912294-60-8".to_string();
        meta.proceedings_title = "Proceedings of DRS2024".to_string();
        let body = build(meta, vec![paper("A", "23")]);
        let conference = body.child("conference").expect("conference");
        assert!(conference.child("proceedings_metadata").is_none());
        let volume = conference
            .child("proceedings_series_metadata")
            .expect("series volume");
        assert!(volume.attr("language").is_none());
        let order: Vec<&str> = volume.children().iter().map(Element::name).collect();
        assert_eq!(
            order,
            vec![
                "series_metadata",
                "proceedings_title",
                "publisher",
                "publication_date",
                "isbn",
                "doi_data"
            ]
        );
        assert_eq!(
            volume.find_text("series_metadata/titles/title"),
            Some("DRS Conference Proceedings")
        );
        assert_eq!(volume.find_text("series_metadata/issn"), Some("1234-5678"));
        assert_eq!(volume.find_text("proceedings_title"), Some("Proceedings of DRS2024"));
        assert_eq!(volume.find_text("isbn"), Some("978-1-912294-60-8"));
        assert!(volume.child("noisbn").is_none());
    }

    #[test]
    fn papers_use_their_own_dates() {
        let body = build(collection(), vec![paper("A", "23"), paper("B", "25")]);
        let conference = body.child("conference").expect("conference");
        let papers: Vec<&Element> = conference.children_named("conference_paper").collect();
        assert_eq!(papers.len(), 2);
        assert_eq!(papers[1].attr("publication_type"), Some("full_text"));
        assert_eq!(papers[1].find_text("titles/title"), Some("B"));
        assert_eq!(papers[1].find_text("publication_date/day"), Some("25"));
        assert_eq!(
            papers[1].find("publication_date").and_then(|e| e.attr("media_type")),
            Some("online")
        );
        let date_order: Vec<&str> = papers[0]
            .find("publication_date")
            .expect("date")
            .children()
            .iter()
            .map(Element::name)
            .collect();
        assert_eq!(date_order, vec!["month", "day", "year"]);
    }

    #[test]
    fn empty_records_fail() {
        let error = Proceedings::new(collection(), Vec::new()).expect_err("empty");
        assert!(matches!(error, DepositError::EmptyProceedings));

        let mut meta = collection();
        meta.conference_date = Some(ConferenceDates::default());
        let error = Proceedings::new(meta, Vec::new()).expect_err("empty with dates");
        assert!(matches!(error, DepositError::EmptyProceedings));
    }

    #[test]
    fn blank_issn_never_yields_series_block() {
        let mut meta = collection();
        meta.issn = "   ".to_string();
        meta.series_title = "DRS Conference Proceedings".to_string();
        let proceedings = Proceedings::new(meta, vec![paper("A", "23")]).expect("proceedings");
        assert_eq!(proceedings.volume_kind(), VolumeKind::Single);

        let body = build(proceedings.collection().clone(), vec![paper("A", "23")]);
        let conference = body.child("conference").expect("conference");
        assert!(conference.child("proceedings_series_metadata").is_none());
        assert!(conference.find("proceedings_metadata/series_metadata").is_none());
    }
}
