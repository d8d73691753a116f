//! XML Tree Reader
//!
//! Turns an upstream XML document into a loosely-typed `serde_json::Value` tree:
//!
//! - attributes are merged into the element's object as string fields
//! - a child element that occurs once is stored as a bare value
//! - a child element that occurs several times is stored as an array
//! - an element with no attributes and no children collapses to its text
//! - text inside an element that also has attributes/children lands under `"_"`
//!
//! The shape therefore depends on cardinality, which is why every consumer
//! reads repeated fields through [`super::normalize::to_list`].

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};
use thiserror::Error;

/// Key under which mixed-content text is stored.
pub const TEXT_KEY: &str = "_";

// == XML Error ==
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("malformed XML: {0}")]
    Syntax(#[from] quick_xml::Error),

    #[error("malformed attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    #[error("document ended inside <{0}>")]
    UnexpectedEof(String),

    #[error("closing tag without matching opening tag")]
    Unbalanced,

    #[error("document has no root element")]
    NoRoot,
}

// == Pending Element ==
/// An element whose closing tag has not been read yet.
struct PendingElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<(String, Value)>,
    text: String,
}

impl PendingElement {
    fn open(start: &BytesStart<'_>) -> Result<Self, XmlError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            attributes.push((key, value));
        }

        Ok(Self {
            name,
            attributes,
            children: Vec::new(),
            text: String::new(),
        })
    }

    fn close(self) -> (String, Value) {
        if self.attributes.is_empty() && self.children.is_empty() {
            return (self.name, Value::String(self.text));
        }

        let mut object = Map::new();
        for (key, value) in self.attributes {
            object.insert(key, Value::String(value));
        }
        for (key, value) in self.children {
            let merged = match object.remove(&key) {
                None => value,
                Some(Value::Array(mut items)) => {
                    items.push(value);
                    Value::Array(items)
                }
                Some(existing) => Value::Array(vec![existing, value]),
            };
            object.insert(key, merged);
        }
        if !self.text.is_empty() {
            object.insert(TEXT_KEY.to_string(), Value::String(self.text));
        }

        (self.name, Value::Object(object))
    }
}

// == Parse ==
/// Parses `xml` into a single-key object `{ <root name>: <root value> }`.
pub fn parse_document(xml: &str) -> Result<Value, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<PendingElement> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => stack.push(PendingElement::open(&start)?),
            Event::Empty(start) => {
                let element = PendingElement::open(&start)?;
                attach(&mut stack, &mut root, element.close());
            }
            Event::End(_) => {
                let element = stack.pop().ok_or(XmlError::Unbalanced)?;
                attach(&mut stack, &mut root, element.close());
            }
            Event::Text(text) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&text.unescape()?);
                }
            }
            Event::CData(data) => {
                if let Some(current) = stack.last_mut() {
                    current
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(XmlError::UnexpectedEof(open.name));
    }

    let (name, value) = root.ok_or(XmlError::NoRoot)?;
    let mut document = Map::new();
    document.insert(name, value);
    Ok(Value::Object(document))
}

fn attach(
    stack: &mut [PendingElement],
    root: &mut Option<(String, Value)>,
    (name, value): (String, Value),
) {
    match stack.last_mut() {
        Some(parent) => parent.children.push((name, value)),
        None => *root = Some((name, value)),
    }
}
