//! Serialization of built element trees to XML text.
//!
//! Uses `io::Result` internally because `quick_xml::Writer` closures
//! require `io::Result<()>`.

use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesText, Event};

use ebaylink_model::{Element, XmlNode};

use crate::encoder::EncoderOptions;
use crate::error::XmlError;

/// Serialize an element tree as a complete document: XML declaration
/// followed by the root element, optionally indented.
pub fn to_xml(root: &Element, options: &EncoderOptions) -> Result<String, XmlError> {
    let mut buf = Vec::with_capacity(512);
    if options.pretty {
        let mut writer = Writer::new_with_indent(&mut buf, b' ', 2);
        write_document(&mut writer, root, options)?;
    } else {
        let mut writer = Writer::new(&mut buf);
        write_document(&mut writer, root, options)?;
    }
    String::from_utf8(buf).map_err(|e| XmlError::ParseError(e.to_string()))
}

fn write_document<W: Write>(
    writer: &mut Writer<W>,
    root: &Element,
    options: &EncoderOptions,
) -> io::Result<()> {
    let standalone = options.standalone.map(|s| if s { "yes" } else { "no" });
    writer.write_event(Event::Decl(BytesDecl::new(
        &options.xml_version,
        Some(&options.xml_encoding),
        standalone,
    )))?;
    write_element(writer, root)
}

/// Write one element and its subtree. Text nodes are escaped on the way
/// out; CDATA sections are emitted raw.
fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> io::Result<()> {
    let start = writer.create_element(element.name()).with_attributes(
        element
            .attributes()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str())),
    );

    if element.children().is_empty() {
        start.write_empty()?;
        return Ok(());
    }

    start.write_inner_content(|w| {
        for child in element.children() {
            match child {
                XmlNode::Element(e) => write_element(w, e)?,
                XmlNode::Text(t) => {
                    w.write_event(Event::Text(BytesText::new(t)))?;
                }
                XmlNode::CData(t) => {
                    w.write_event(Event::CData(BytesCData::new(t)))?;
                }
            }
        }
        Ok(())
    })?;
    Ok(())
}
