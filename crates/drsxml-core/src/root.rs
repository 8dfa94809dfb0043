//! The `doi_batch` root element.

use drsxml_model::Element;

/// Crossref schema version written to `doi_batch/@version`.
pub const SCHEMA_VERSION: &str = "5.3.0";

/// Default namespace of the deposit.
pub const CROSSREF_NS: &str = "http://www.crossref.org/schema/5.3.0";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const JATS_NS: &str = "http://www.ncbi.nlm.nih.gov/JATS1";
pub const FUNDREF_NS: &str = "http://www.crossref.org/fundref.xsd";
pub const MATHML_NS: &str = "http://www.w3.org/1998/Math/MathML";

/// Value of `xsi:schemaLocation`.
pub const SCHEMA_LOCATION: &str =
    "http://www.crossref.org/schema/5.3.0 https://www.crossref.org/schemas/crossref5.3.0.xsd";

/// A deposit document: root attributes plus its `head` and `body`.
///
/// `root` never has children of its own; the writer emits `head` then `body`
/// inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoiBatch {
    pub root: Element,
    pub head: Element,
    pub body: Element,
}

impl DoiBatch {
    /// Empty batch with namespace declarations, version and schema location.
    pub fn new() -> Self {
        let root = Element::new("doi_batch")
            .with_attr("xmlns", CROSSREF_NS)
            .with_attr("xmlns:xsi", XSI_NS)
            .with_attr("xmlns:jats", JATS_NS)
            .with_attr("xmlns:fr", FUNDREF_NS)
            .with_attr("xmlns:mml", MATHML_NS)
            .with_attr("version", SCHEMA_VERSION)
            .with_attr("xsi:schemaLocation", SCHEMA_LOCATION);
        Self {
            root,
            head: Element::new("head"),
            body: Element::new("body"),
        }
    }

    /// Whole document as a single tree.
    pub fn into_element(self) -> Element {
        let mut root = self.root;
        root.push(self.head);
        root.push(self.body);
        root
    }
}

impl Default for DoiBatch {
    fn default() -> Self {
        Self::new()
    }
}
