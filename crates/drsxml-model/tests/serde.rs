//! JSON forms of the model types.

use drsxml_model::{CollectionMetadata, Record};

#[test]
fn record_serializes_as_flat_object() {
    let record = Record::from_iter([("title", "Paper"), ("author1_lname", "Rittel")]);
    let json = serde_json::to_value(&record).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({"author1_lname": "Rittel", "title": "Paper"})
    );

    let back: Record = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, record);
    assert_eq!(back.authors()[0].surname, "Rittel");
}

#[test]
fn collection_without_dates_omits_the_field() {
    let collection = CollectionMetadata {
        name: "DRS2022: Bilbao".to_string(),
        ..CollectionMetadata::default()
    };
    let json = serde_json::to_value(&collection).expect("serialize");
    assert!(json.get("conference_date").is_none());
    assert_eq!(json["name"], "DRS2022: Bilbao");
    assert_eq!(collection.proceedings_title(), "DRS2022: Bilbao");
}

#[test]
fn empty_collection_json_is_all_defaults() {
    let collection: CollectionMetadata = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(collection, CollectionMetadata::default());
    assert!(collection.issn().is_none());
    assert!(collection.isbn().is_none());
}
