//! xml-query: ad-hoc query helpers over a parsed XML document
//!
//! This library wraps a parsed document tree and exposes a handful of
//! read-only queries: attribute values of elements matching a tag name,
//! child attributes and nested text inside an attribute-filtered parent,
//! and per-element text tables. It is a convenience facade over an XML
//! parsing backend, not a parser or transformation engine.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use xml_query::QuickXmlFacade;
//!
//! let facade = QuickXmlFacade::parse(
//!     "calendars.xml",
//!     r#"<calendars><calendar title="Doodles" id="cal-1"/></calendars>"#,
//! )?;
//! let values = facade.tag_name_attributes("calendar", &["title", "id"]);
//! ```

pub mod facade;

// Re-export core types
pub use facade::{QuickXmlFacade, XmlQueryFacade};
pub use xml_tree_traits::{ElementRead, Error, Result, XmlDocument, XmlParser};
