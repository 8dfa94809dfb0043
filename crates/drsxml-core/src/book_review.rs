//! `report-paper` bodies for book reviews.

use tracing::debug;

use drsxml_model::record::PUBLICATION_DATE;
use drsxml_model::{DepositError, Element, Record, Result};

use crate::contributors::add_contributors;
use crate::doi::add_doi_data;

/// Append one `report-paper` per record, in input order.
///
/// Fails on the first record whose publication date is not `YYYY-MM-DD`.
pub fn populate_book_review_body(body: &mut Element, records: &[Record]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        debug!(record = index, title = record.title(), "adding book review");
        body.push(report_paper(index, record)?);
    }
    Ok(())
}

fn report_paper(index: usize, record: &Record) -> Result<Element> {
    let raw_date = record.get(PUBLICATION_DATE);
    let (year, month, day) =
        split_publication_date(raw_date).ok_or_else(|| DepositError::MalformedDate {
            record: index,
            value: raw_date.to_string(),
        })?;

    let mut paper = Element::new("report-paper");
    let metadata = paper.add_child("report-paper_metadata");
    metadata.set_attr("language", "en");

    add_contributors(metadata, record);
    metadata
        .add_child("titles")
        .add_text_child("title", record.title());
    metadata.add_text_child("edition_number", "0");

    let date = metadata.add_child("publication_date");
    date.add_text_child("month", month);
    date.add_text_child("day", day);
    date.add_text_child("year", year);

    add_doi_data(metadata, record.doi(), record.resource_url());
    Ok(paper)
}

/// Split `YYYY-MM-DD[ anything]` into its literal year, month and day parts.
///
/// Text after the first space is ignored. The date part must contain exactly
/// two hyphens; the pieces are not padded or otherwise validated.
pub fn split_publication_date(value: &str) -> Option<(&str, &str, &str)> {
    let date = value.trim().split(' ').next().unwrap_or_default();
    let mut parts = date.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return None;
    };
    Some((year, month, day))
}
