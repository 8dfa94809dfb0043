use drsxml_model::Element;

/// Append `doi_data` with the DOI and resource URL, both written verbatim.
pub fn add_doi_data(parent: &mut Element, doi: &str, resource: &str) {
    let doi_data = parent.add_child("doi_data");
    doi_data.add_text_child("doi", doi);
    doi_data.add_text_child("resource", resource);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_values_verbatim() {
        let mut parent = Element::new("paper");
        add_doi_data(&mut parent, " 10.21606/drs.2024.1 ", "not a url");
        assert_eq!(parent.find_text("doi_data/doi"), Some(" 10.21606/drs.2024.1 "));
        assert_eq!(parent.find_text("doi_data/resource"), Some("not a url"));
    }
}
