//! Core trait abstractions for parsed XML document trees.
//!
//! This crate defines the contract an XML parsing library must satisfy to
//! back the query facade: parsing text into an owned document, retrieving
//! the root element, and reading elements (children by tag name, attribute
//! values by name, nested text content).

pub mod error;
pub mod tree;

pub use error::{Error, Result};
pub use tree::{ElementRead, XmlDocument, XmlParser};
