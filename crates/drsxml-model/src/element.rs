//! Minimal owned XML element tree.
//!
//! Assembly builds the whole document in memory with these nodes; the writer
//! serializes it in one pass afterwards. Elements hold either text or
//! children, never both; the writer refuses to serialize one that has both.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set an attribute, replacing an existing value with the same key.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Append `child` and return a handle to it.
    pub fn push(&mut self, child: Element) -> &mut Element {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Append an empty element named `name`.
    pub fn add_child(&mut self, name: impl Into<String>) -> &mut Element {
        self.push(Element::new(name))
    }

    /// Append `<name>text</name>`.
    pub fn add_text_child(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Element {
        self.push(Element::new(name).with_text(text))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Follow a `/`-separated path of child names, taking the first match at
    /// each step.
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Text of the element at `path`.
    pub fn find_text(&self, path: &str) -> Option<&str> {
        self.find(path).and_then(Element::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_nested_tree() {
        let mut root = Element::new("titles");
        root.add_text_child("title", "Hello");
        root.add_child("subtitle").set_attr("lang", "en");
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.find_text("title"), Some("Hello"));
        assert_eq!(root.find("subtitle").and_then(|e| e.attr("lang")), Some("en"));
        assert!(root.find("missing/child").is_none());
    }

    #[test]
    fn set_attr_replaces_existing_value() {
        let element = Element::new("a").with_attr("k", "1").with_attr("k", "2");
        assert_eq!(element.attributes().len(), 1);
        assert_eq!(element.attr("k"), Some("2"));
    }

    #[test]
    fn children_named_filters() {
        let mut root = Element::new("contributors");
        root.add_child("person_name");
        root.add_child("organization");
        root.add_child("person_name");
        assert_eq!(root.children_named("person_name").count(), 2);
    }
}
