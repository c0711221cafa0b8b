//! XML parser building owned [`Document`] trees via quick-xml

use quick_xml::events::attributes::Attributes;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use xml_tree_traits::error::{Error, Result};
use xml_tree_traits::tree::XmlParser;

use crate::tree::{Document, Element};

/// Parsing backend driving quick-xml's pull reader.
#[derive(Debug, Default)]
pub struct QuickXmlParser;

impl QuickXmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl XmlParser for QuickXmlParser {
    type Document = Document;

    fn parse(&mut self, xml: &str) -> Result<Document> {
        build_document(xml)
    }
}

/// An element being constructed while its end tag is still pending.
struct BuildNode {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl BuildNode {
    fn into_element(self) -> Element {
        let text = if self.text.is_empty() {
            None
        } else {
            Some(self.text)
        };
        Element::new(self.name, self.attributes, self.children, text)
    }
}

fn build_document(xml: &str) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text_start = false;
    reader.config_mut().trim_text_end = false;

    let mut stack: Vec<BuildNode> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(open_node(&e)?);
            }
            Ok(Event::End(e)) => {
                let node = stack.pop().ok_or_else(|| {
                    Error::Parse(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(e.name().as_ref())
                    ))
                })?;
                attach(node.into_element(), &mut stack, &mut root)?;
            }
            Ok(Event::Empty(e)) => {
                let node = open_node(&e)?;
                attach(node.into_element(), &mut stack, &mut root)?;
            }
            Ok(Event::Text(e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| Error::Parse(format!("invalid text content: {}", err)))?;
                append_text(&mut stack, &text);
            }
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                append_text(&mut stack, &text);
            }
            Ok(Event::Comment(_) | Event::PI(_) | Event::Decl(_) | Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Parse(format!(
                    "{} at byte {}",
                    e,
                    reader.error_position()
                )));
            }
        }
    }

    // Anything still open at EOF is an unclosed element.
    if let Some(node) = stack.last() {
        return Err(Error::Parse(format!(
            "unexpected end of input, expected closing tag </{}>",
            node.name
        )));
    }

    let root = root.ok_or_else(|| Error::Parse("empty document: no root element".to_string()))?;
    Ok(Document::new(root))
}

fn open_node(e: &BytesStart<'_>) -> Result<BuildNode> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let attributes = collect_attributes(e.attributes())?;
    Ok(BuildNode {
        name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

fn collect_attributes(attrs: Attributes<'_>) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for attr in attrs {
        let attr = attr.map_err(|e| Error::Parse(format!("malformed attribute: {}", e)))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Parse(format!("invalid attribute value: {}", e)))?
            .into_owned();
        out.push((name, value));
    }
    Ok(out)
}

fn attach(element: Element, stack: &mut [BuildNode], root: &mut Option<Element>) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_some() {
                return Err(Error::Parse("multiple root elements".to_string()));
            }
            *root = Some(element);
        }
    }
    Ok(())
}

/// Whitespace-only runs are indentation noise between elements; drop them.
fn append_text(stack: &mut [BuildNode], text: &str) {
    if let Some(node) = stack.last_mut() {
        if text.trim().is_empty() {
            return;
        }
        node.text.push_str(text);
    }
}
