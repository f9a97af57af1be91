//! Minimal response reading: extracting `Errors` entries from Trading API
//! response documents.
//!
//! Only the error collection is read; everything else in the response is
//! skipped. `Errors` entries are expected as direct children of the
//! response root, each carrying `SeverityCode` and `LongMessage` (plus
//! `ShortMessage` and `ErrorCode` when present).

use quick_xml::Reader;
use quick_xml::events::Event;

use ebaylink_model::{ResponseError, Severity};

use crate::error::XmlError;

/// Read every top-level `Errors` entry of a response document, in document
/// order.
pub fn read_response_errors(xml: &str) -> Result<Vec<ResponseError>, XmlError> {
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    // Skip the declaration and find the response root.
    loop {
        match reader.read_event()? {
            Event::Start(_) => break,
            Event::Eof => {
                return Err(XmlError::MissingElement("response root".to_owned()));
            }
            _ => {}
        }
    }

    let mut errors = Vec::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                let tag_name = std::str::from_utf8(name.as_ref())
                    .map_err(|e| XmlError::ParseError(e.to_string()))?;
                if tag_name == "Errors" {
                    errors.push(read_error_entry(&mut reader)?);
                } else {
                    skip_element(&mut reader)?;
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF in response".to_owned(),
                ));
            }
            _ => {}
        }
    }

    Ok(errors)
}

/// Parse one `Errors` entry. A missing `SeverityCode` is treated as fatal.
fn read_error_entry(reader: &mut Reader<&[u8]>) -> Result<ResponseError, XmlError> {
    let mut severity = None;
    let mut long_message = None;
    let mut short_message = None;
    let mut error_code = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name();
                let tag_name = std::str::from_utf8(name.as_ref())
                    .map_err(|e| XmlError::ParseError(e.to_string()))?;
                match tag_name {
                    "SeverityCode" => severity = Some(read_text_content(reader)?),
                    "LongMessage" => long_message = Some(read_text_content(reader)?),
                    "ShortMessage" => short_message = Some(read_text_content(reader)?),
                    "ErrorCode" => error_code = Some(read_text_content(reader)?),
                    _ => skip_element(reader)?,
                }
            }
            Event::End(_) => break,
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF in Errors".to_owned(),
                ));
            }
            _ => {}
        }
    }

    Ok(ResponseError {
        severity: Severity::from(severity.as_deref().unwrap_or("")),
        long_message: long_message.unwrap_or_default(),
        short_message,
        error_code,
    })
}

/// Read the text content of the current element and consume its end tag.
fn read_text_content(reader: &mut Reader<&[u8]>) -> Result<String, XmlError> {
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Text(e) => {
                let decoded = e
                    .decode()
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                let unescaped = quick_xml::escape::unescape(&decoded)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(&unescaped);
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                let raw = std::str::from_utf8(&bytes)
                    .map_err(|err| XmlError::ParseError(err.to_string()))?;
                text.push_str(raw);
            }
            Event::End(_) => {
                return Ok(text);
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while reading text content".to_owned(),
                ));
            }
            _ => {}
        }
    }
}

/// Skip over an element and all its children.
fn skip_element(reader: &mut Reader<&[u8]>) -> Result<(), XmlError> {
    let mut depth: u32 = 1;
    loop {
        match reader.read_event()? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            Event::Eof => {
                return Err(XmlError::UnexpectedElement(
                    "unexpected EOF while skipping element".to_owned(),
                ));
            }
            _ => {}
        }
    }
}
