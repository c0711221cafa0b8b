//! Owned document tree produced by the quick-xml backend

use xml_tree_traits::tree::{ElementRead, XmlDocument};

/// A parsed XML document owning its element tree.
///
/// Constructed once by [`crate::QuickXmlParser`]; there is no mutation API.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    pub(crate) fn new(root: Element) -> Self {
        Self { root }
    }

    /// The root element of the document
    pub fn root(&self) -> &Element {
        &self.root
    }
}

/// A single element: tag name, attribute pairs, child elements, optional
/// text content.
///
/// Each element exclusively owns its children, so the whole document is a
/// simple rooted tree. Attribute keys are unique within an element; the
/// parser rejects duplicates.
#[derive(Debug, Clone)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    pub(crate) fn new(
        name: String,
        attributes: Vec<(String, String)>,
        children: Vec<Element>,
        text: Option<String>,
    ) -> Self {
        Self {
            name,
            attributes,
            children,
            text,
        }
    }

    /// Tag name as written in the source
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All attribute (name, value) pairs in source order
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// All direct child elements in document order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Text content, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl XmlDocument for Document {
    type Elem = Element;

    fn root(&self) -> &Element {
        &self.root
    }
}

impl ElementRead for Element {
    fn name(&self) -> &str {
        &self.name
    }

    fn children_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.children.iter().filter(|c| c.name == tag).collect()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn child_text(&self, tag: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|c| c.name == tag)
            .and_then(|c| c.text.as_deref())
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
