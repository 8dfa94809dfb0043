use drsxml_model::{Author, Element, Record};

/// Append a `contributors` block listing the record's authors.
///
/// Returns the number of `person_name` entries written.
pub fn add_contributors(parent: &mut Element, record: &Record) -> usize {
    let contributors = parent.add_child("contributors");
    let authors = record.authors();
    for author in &authors {
        contributors.push(person_name(author));
    }
    authors.len()
}

fn person_name(author: &Author) -> Element {
    let sequence = if author.is_first() { "first" } else { "additional" };
    let mut person = Element::new("person_name")
        .with_attr("sequence", sequence)
        .with_attr("contributor_role", "author");

    if let Some(given) = &author.given_name {
        person.add_text_child("given_name", given.as_str());
    }
    person.add_text_child("surname", author.surname.as_str());

    if let Some(institution) = &author.institution {
        person
            .add_child("affiliations")
            .add_child("institution")
            .add_text_child("institution_name", institution.as_str());
    }
    person
}
