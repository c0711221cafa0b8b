//! Query facade over a parsed XML document

use std::collections::HashMap;

use quickxml_adapter::QuickXmlParser;
use xml_tree_traits::error::Result;
use xml_tree_traits::tree::{ElementRead, XmlDocument, XmlParser};

/// Facade over the default quick-xml backend.
pub type QuickXmlFacade = XmlQueryFacade<quickxml_adapter::Document>;

/// Read-only query helpers over a parsed XML document.
///
/// Constructed from a path label (used only in diagnostics, never read from
/// disk) and the XML content itself. All operations inspect the root
/// element's direct children. A missing attribute or nested tag yields
/// `None` in the corresponding output slot, and an empty match set yields an
/// empty collection; queries never fail.
#[derive(Debug)]
pub struct XmlQueryFacade<D> {
    path: String,
    document: D,
}

impl<D: XmlDocument> XmlQueryFacade<D> {
    /// Parse `content` with the supplied backend.
    ///
    /// On malformed input the parse error is logged against the path label
    /// and returned; no facade exists afterwards.
    pub fn parse_with<P>(parser: &mut P, path: &str, content: &str) -> Result<Self>
    where
        P: XmlParser<Document = D>,
    {
        match parser.parse(content) {
            Ok(document) => Ok(Self {
                path: path.to_string(),
                document,
            }),
            Err(err) => {
                tracing::error!(path, error = %err, "error building XML document");
                Err(err)
            }
        }
    }

    /// The diagnostic path label supplied at construction
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The parsed document, for ad-hoc traversal beyond the canned queries
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Attribute values over all direct children of the root with tag
    /// `element_name`.
    ///
    /// The output is flat: one slot per (matching child, requested attribute
    /// name) pair, ordered by child first, then by requested name. Callers
    /// that need per-child grouping re-chunk by `attribute_names.len()`.
    pub fn tag_name_attributes(
        &self,
        element_name: &str,
        attribute_names: &[&str],
    ) -> Vec<Option<String>> {
        let mut values = Vec::new();
        for child in self.document.root().children_by_tag(element_name) {
            for name in attribute_names {
                values.push(child.attribute(name).map(str::to_owned));
            }
        }
        values
    }

    /// Attribute values of `child_tag` children inside the first qualifying
    /// `parent_name` element.
    ///
    /// A parent qualifies when every key of `parent_properties` is present
    /// among its attributes; the required values are not compared. Only the
    /// first qualifying parent in document order is consulted, and an empty
    /// `parent_properties` qualifies every parent. With no qualifying parent
    /// the result is empty.
    pub fn child_attributes_within(
        &self,
        parent_name: &str,
        parent_properties: &HashMap<String, String>,
        child_tag: &str,
        attribute_names: &[&str],
    ) -> Vec<Option<String>> {
        let mut values = Vec::new();
        if let Some(parent) = self.first_qualifying(parent_name, parent_properties) {
            for child in parent.children_by_tag(child_tag) {
                for name in attribute_names {
                    values.push(child.attribute(name).map(str::to_owned));
                }
            }
        }
        values
    }

    /// Nested text values of `child_tag` children inside the first
    /// qualifying `parent_name` element.
    ///
    /// Same filtering and short-circuit as `child_attributes_within`, but
    /// each requested name selects the text of a nested sub-element of the
    /// child rather than an attribute.
    pub fn child_texts_within(
        &self,
        parent_name: &str,
        parent_properties: &HashMap<String, String>,
        child_tag: &str,
        text_tag_names: &[&str],
    ) -> Vec<Option<String>> {
        let mut values = Vec::new();
        if let Some(parent) = self.first_qualifying(parent_name, parent_properties) {
            for child in parent.children_by_tag(child_tag) {
                for name in text_tag_names {
                    values.push(child.child_text(name).map(str::to_owned));
                }
            }
        }
        values
    }

    /// Nested text values for every direct child of the root with tag
    /// `tag_name`.
    ///
    /// One row per matching child in document order; each row has exactly
    /// `text_tag_names.len()` entries, `None` where the nested tag is
    /// missing.
    pub fn tag_values_within(
        &self,
        tag_name: &str,
        text_tag_names: &[&str],
    ) -> Vec<Vec<Option<String>>> {
        self.document
            .root()
            .children_by_tag(tag_name)
            .into_iter()
            .map(|child| {
                text_tag_names
                    .iter()
                    .map(|name| child.child_text(name).map(str::to_owned))
                    .collect()
            })
            .collect()
    }

    /// First direct child of the root tagged `parent_name` whose attribute
    /// keys are a superset of the required keys. Values are ignored.
    fn first_qualifying(
        &self,
        parent_name: &str,
        required: &HashMap<String, String>,
    ) -> Option<&D::Elem> {
        self.document
            .root()
            .children_by_tag(parent_name)
            .into_iter()
            .find(|parent| required.keys().all(|key| parent.attribute(key).is_some()))
    }
}

impl QuickXmlFacade {
    /// Parse `content` with the default quick-xml backend.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        Self::parse_with(&mut QuickXmlParser::new(), path, content)
    }
}
