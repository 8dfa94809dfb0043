//! Batch `head`: id, timestamp, depositor and registrant.

use std::path::Path;

use chrono::NaiveDateTime;
use tracing::debug;

use drsxml_model::{DepositorConfig, Element};

use crate::clock::Clock;

/// Populate `head` for a batch generated from `source_name`.
///
/// Only the file stem of `source_name` is used. The clock is read once so the
/// batch id and the timestamp always describe the same instant.
pub fn populate_head(
    head: &mut Element,
    source_name: &str,
    config: &DepositorConfig,
    clock: &dyn Clock,
) {
    let now = clock.now();
    let batch_id = batch_id(&source_stem(source_name), now);
    let timestamp = timestamp(now);
    debug!(%batch_id, %timestamp, "populating batch head");

    head.add_text_child("doi_batch_id", batch_id);
    head.add_text_child("timestamp", timestamp);

    let depositor = head.add_child("depositor");
    depositor.add_text_child("depositor_name", config.depositor_name.as_str());
    depositor.add_text_child("email_address", config.email_address.as_str());

    head.add_text_child("registrant", config.registrant.as_str());
}

/// `<stem>-<YYMMDD>`.
pub fn batch_id(stem: &str, now: NaiveDateTime) -> String {
    format!("{stem}-{}", now.format("%y%m%d"))
}

/// `YYYYMMDDHHMMSS` followed by four zeros.
pub fn timestamp(now: NaiveDateTime) -> String {
    format!("{}0000", now.format("%Y%m%d%H%M%S"))
}

fn source_stem(source_name: &str) -> String {
    Path::new(source_name)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::clock::FixedClock;

    fn clock() -> FixedClock {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|date| date.and_hms_opt(9, 5, 2))
            .expect("valid date");
        FixedClock(at)
    }

    #[test]
    fn head_uses_stem_and_fixed_clock() {
        let mut head = Element::new("head");
        populate_head(
            &mut head,
            "data/book_reviews_2024.xls",
            &DepositorConfig::default(),
            &clock(),
        );
        assert_eq!(head.find_text("doi_batch_id"), Some("book_reviews_2024-240307"));
        assert_eq!(head.find_text("timestamp"), Some("202403070905020000"));
        assert_eq!(head.find_text("depositor/depositor_name"), Some("desres:desres"));
        assert_eq!(
            head.find_text("depositor/email_address"),
            Some("dl@designresearchsociety.org")
        );
        assert_eq!(head.find_text("registrant"), Some("Digital Library"));
    }

    #[test]
    fn timestamp_is_eighteen_digits() {
        let value = timestamp(clock().now());
        assert_eq!(value.len(), 18);
        assert!(value.chars().all(|ch| ch.is_ascii_digit()));
        assert!(value.ends_with("0000"));
    }

    #[test]
    fn config_overrides_identity() {
        let config = DepositorConfig {
            depositor_name: "acme:acme".to_string(),
            email_address: "deposits@example.org".to_string(),
            registrant: "Acme".to_string(),
            ..DepositorConfig::default()
        };
        let mut head = Element::new("head");
        populate_head(&mut head, "batch.csv", &config, &clock());
        assert_eq!(head.find_text("depositor/depositor_name"), Some("acme:acme"));
        assert_eq!(head.find_text("registrant"), Some("Acme"));
        let order: Vec<&str> = head.children().iter().map(Element::name).collect();
        assert_eq!(
            order,
            vec!["doi_batch_id", "timestamp", "depositor", "registrant"]
        );
    }
}
