//! Minimal element tree over quick-xml.
//!
//! Design documents are small, so they are read fully into an
//! [`XmlElement`] tree before any shape is decoded. Text content is ignored.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::{DesignError, DesignResult};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.push((key.into(), value.to_string()));
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Integer attribute that must be present.
    pub fn required_i32(&self, key: &str) -> DesignResult<i32> {
        let raw = self.attr(key).ok_or_else(|| {
            DesignError::malformed(format!("<{}> is missing attribute '{}'", self.name, key))
        })?;
        raw.trim().parse().map_err(|_| {
            DesignError::malformed(format!(
                "<{}> attribute '{}' is not an integer: '{}'",
                self.name, key, raw
            ))
        })
    }

    /// First child element with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn required_child(&self, name: &str) -> DesignResult<&XmlElement> {
        self.child(name).ok_or_else(|| {
            DesignError::malformed(format!("<{}> has no <{}> element", self.name, name))
        })
    }
}

/// Serializes `root` as an indented UTF-8 document with an XML declaration.
pub fn write_document(root: &XmlElement) -> DesignResult<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| DesignError::XmlWrite(e.to_string()))?;
    write_element(&mut writer, root)?;
    String::from_utf8(writer.into_inner()).map_err(|e| DesignError::XmlWrite(e.to_string()))
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &XmlElement) -> DesignResult<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| DesignError::XmlWrite(e.to_string()));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| DesignError::XmlWrite(e.to_string()))?;
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(|e| DesignError::XmlWrite(e.to_string()))
}

/// Parses a document into its root element.
///
/// Fails on XML syntax errors, on an empty document, on more than one root
/// element and on unclosed elements.
pub fn parse_document(content: &str) -> DesignResult<XmlElement> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(DesignError::malformed("multiple root elements"));
                }
                stack.push(element_from(&e)?);
            }
            Event::Empty(e) => {
                let element = element_from(&e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| DesignError::malformed("unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(DesignError::malformed(format!(
            "element <{}> is not closed",
            open.name
        )));
    }
    root.ok_or_else(|| DesignError::malformed("document has no root element"))
}

fn element_from(start: &BytesStart<'_>) -> DesignResult<XmlElement> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|_| DesignError::malformed("element name is not valid UTF-8"))?
        .to_string();

    let mut element = XmlElement::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|_| DesignError::malformed("attribute name is not valid UTF-8"))?
            .to_string();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    element: XmlElement,
) -> DesignResult<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(DesignError::malformed("multiple root elements"));
    }
    *root = Some(element);
    Ok(())
}
