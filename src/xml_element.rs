use std::str::FromStr;

use quick_xml::{events::{attributes::AttrError, BytesStart, Event}, Reader};
use thiserror::Error;

use crate::interfaces::MetadataElement;

#[derive(Debug, Error)]
pub enum XmlTreeError {
    #[error("Malformed xml: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Malformed attribute: {0}")]
    Attribute(#[from] AttrError),
    #[error("Xml document has no root element")]
    NoRootElement,
    #[error("Xml document has more than one root element")]
    MultipleRootElements,
    #[error("Element <{0}> is never closed")]
    UnclosedElement(String),
}

/// Owned element of a territory description document.
///
/// Only element names, attributes and direct text are kept; comments,
/// processing instructions and the xml declaration are dropped while parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parses the document and returns its root element.
    pub fn parse_str(xml: &str) -> Result<Self, XmlTreeError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut stack: Vec<XmlElement> = Vec::new();
        let mut root = None;
        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    // quick-xml checks that end names match the open ones.
                    let element = stack.pop().ok_or(XmlTreeError::NoRootElement)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        current.push_text(&String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                _ => (),
            }
        }

        if let Some(unclosed) = stack.pop() {
            return Err(XmlTreeError::UnclosedElement(unclosed.name));
        }
        root.ok_or(XmlTreeError::NoRootElement)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, XmlTreeError> {
        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes,
            text: None,
            children: Vec::new(),
        })
    }

    fn push_text(&mut self, text: &str) {
        match &mut self.text {
            Some(existing) => existing.push_str(text),
            None => self.text = Some(text.to_owned()),
        }
    }

    fn attach(
        stack: &mut [XmlElement],
        root: &mut Option<XmlElement>,
        element: XmlElement,
    ) -> Result<(), XmlTreeError> {
        match stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if root.is_none() => *root = Some(element),
            None => return Err(XmlTreeError::MultipleRootElements),
        }
        Ok(())
    }
}

impl FromStr for XmlElement {
    type Err = XmlTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl MetadataElement for XmlElement {
    fn children_named<'a>(&'a self, tag: &str) -> Vec<&'a Self> {
        self.children.iter().filter(|child| child.name == tag).collect()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use crate::interfaces::MetadataElement;

    use super::{XmlElement, XmlTreeError};

    #[test]
    fn test_parses_nested_elements() {
        let territory: XmlElement = r#"<?xml version="1.0"?>
            <territory id="FR" countryCode="33">
              <!-- fixed line numbers -->
              <fixedLine>
                <possibleLengths national="9"/>
                <exampleNumber>123456789</exampleNumber>
              </fixedLine>
            </territory>"#
            .parse()
            .unwrap();

        assert_eq!("territory", territory.name());
        assert_eq!(Some("FR"), territory.attribute("id"));
        assert_eq!(None, territory.attribute("nationalPrefix"));

        let fixed_line = territory.children_named("fixedLine");
        assert_eq!(1, fixed_line.len());
        let lengths = fixed_line[0].children_named("possibleLengths");
        assert_eq!(Some("9"), lengths[0].attribute("national"));
        assert_eq!(None, lengths[0].text());
        let example = fixed_line[0].children_named("exampleNumber");
        assert_eq!(Some("123456789"), example[0].text());
    }

    #[test]
    fn test_unescapes_text_and_attributes() {
        let element = XmlElement::parse_str(
            r#"<numberFormat pattern="(\d{2})&amp;"><format>$1 &lt;$2&gt;</format></numberFormat>"#,
        )
        .unwrap();
        assert_eq!(Some(r"(\d{2})&"), element.attribute("pattern"));
        assert_eq!(Some("$1 <$2>"), element.children_named("format")[0].text());
    }

    #[test]
    fn test_keeps_inner_whitespace_of_text() {
        let element = XmlElement::parse_str("<exampleNumber> 01 01 01 01 </exampleNumber>").unwrap();
        assert_eq!(Some("01 01 01 01"), element.text());
    }

    #[test]
    fn test_rejects_broken_documents() {
        assert!(matches!(XmlElement::parse_str(""), Err(XmlTreeError::NoRootElement)));
        assert!(XmlElement::parse_str("<territory><fixedLine></territory>").is_err());
        assert!(matches!(
            XmlElement::parse_str("<a/><b/>"),
            Err(XmlTreeError::MultipleRootElements)
        ));
    }
}
