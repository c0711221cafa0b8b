//! quick-xml backend for the XML tree contract
//!
//! This adapter drives quick-xml's pull parser to build an owned
//! [`Document`] tree and implements the `xml-tree-traits` interfaces on it.

pub mod parser;
pub mod tree;

// Re-export main types
pub use parser::QuickXmlParser;
pub use tree::{Document, Element};
