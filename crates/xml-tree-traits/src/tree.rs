//! XML tree abstraction traits

use std::fmt::Debug;

use crate::error::Result;

/// Trait for XML parsing backends.
///
/// A backend turns XML text into an owned [`XmlDocument`]. Parse failure is
/// the only error path; everything after a successful parse is infallible
/// read access.
pub trait XmlParser {
    /// The document type produced by this parser
    type Document: XmlDocument;

    /// Parse XML from a string and return an owned document
    fn parse(&mut self, xml: &str) -> Result<Self::Document>;
}

/// A parsed XML document.
///
/// Documents are immutable once constructed and may be read concurrently
/// from multiple threads.
pub trait XmlDocument: Debug + Send + Sync {
    /// The element type the document tree is built from
    type Elem: ElementRead;

    /// The root element of the document
    fn root(&self) -> &Self::Elem;
}

/// Read-only access to a single element of a parsed tree.
///
/// Lookups never fail: a missing attribute or nested tag is reported as
/// `None`, not an error.
pub trait ElementRead: Debug + Send + Sync {
    /// Tag name of this element, as written in the source.
    ///
    /// Names are matched literally everywhere in this contract; namespace
    /// prefixes are not interpreted.
    fn name(&self) -> &str;

    /// Direct child elements with the given tag name, in document order
    fn children_by_tag(&self, tag: &str) -> Vec<&Self>;

    /// Attribute value by name; `None` when the attribute is not present
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Text content of the first direct child element with the given tag
    /// name; `None` when no such child exists or it holds no text
    fn child_text(&self, tag: &str) -> Option<&str>;

    /// Own text content; `None` for elements without text
    fn text(&self) -> Option<&str>;
}
