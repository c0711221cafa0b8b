//! Basic tests for quickxml-adapter

use quickxml_adapter::QuickXmlParser;
use xml_tree_traits::{ElementRead, XmlParser};

#[test]
fn parser_builds_document() {
    let mut parser = QuickXmlParser::new();
    let doc = parser.parse("<root><item>test</item></root>").unwrap();

    let root = doc.root();
    assert_eq!(root.name(), "root");

    let children = root.children_by_tag("item");
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].text(), Some("test"));
}

#[test]
fn children_by_tag_filters_and_preserves_order() {
    let mut parser = QuickXmlParser::new();
    let doc = parser
        .parse(r#"<root><item id="a"/><other/><item id="b"/></root>"#)
        .unwrap();

    let items = doc.root().children_by_tag("item");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].attribute("id"), Some("a"));
    assert_eq!(items[1].attribute("id"), Some("b"));
}

#[test]
fn missing_attribute_is_none() {
    let mut parser = QuickXmlParser::new();
    let doc = parser.parse(r#"<root present="yes"/>"#).unwrap();

    assert_eq!(doc.root().attribute("present"), Some("yes"));
    assert_eq!(doc.root().attribute("absent"), None);
}

#[test]
fn child_text_reads_first_matching_child() {
    let mut parser = QuickXmlParser::new();
    let doc = parser
        .parse("<root><time>first</time><time>second</time></root>")
        .unwrap();

    assert_eq!(doc.root().child_text("time"), Some("first"));
    assert_eq!(doc.root().child_text("summary"), None);
}

#[test]
fn invalid_xml_is_a_parse_error() {
    let mut parser = QuickXmlParser::new();
    let result = parser.parse("<root><unclosed>");
    assert!(result.is_err(), "should fail on invalid XML");
}
