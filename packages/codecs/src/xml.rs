//! Flat XML codec.
//!
//! A document is one root element with one child per key:
//!
//! ```text
//! <data><name>Alice</name><age>30</age></data>
//! ```
//!
//! Decoding always yields strings, so a round trip only restores the
//! original map when every value was already a string. Keys are written as
//! tag names without validation. Repeated sibling tags overwrite earlier
//! ones, and anything nested below the children is ignored. A child's value
//! is only the text before its first nested element.
//!
//! Non-string values are written as their JSON text (`true`, `null`,
//! `[1,2]`), not in any host language's display form such as `True` or
//! `None`.

use std::fmt;

use bytes::Bytes;
use interchange_core::{Codec, Error, FlatRecord, Format, Map, Value};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::json;

/// Tag of the root element written by [`encode`].
pub const ROOT_TAG: &str = "data";

fn write_error(e: impl fmt::Display) -> Error {
    Error::Other {
        message: format!("XML write failed: {}", e),
    }
}

fn parse_error(e: impl fmt::Display) -> Error {
    Error::parse(Format::XML, e.to_string())
}

/// The text a value takes inside an element.
///
/// Strings are written verbatim; everything else uses its JSON form.
pub fn text_form(value: &Value) -> Result<String, Error> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => json::encode(other),
    }
}

/// Encode a map as a flat XML document, without an XML declaration.
pub fn encode(map: &Map) -> Result<String, Error> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Start(BytesStart::new(ROOT_TAG)))
        .map_err(write_error)?;
    for (key, value) in map {
        let text = text_form(value)?;
        writer
            .write_event(Event::Start(BytesStart::new(key.as_str())))
            .map_err(write_error)?;
        writer
            .write_event(Event::Text(BytesText::new(&text)))
            .map_err(write_error)?;
        writer
            .write_event(Event::End(BytesEnd::new(key.as_str())))
            .map_err(write_error)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(ROOT_TAG)))
        .map_err(write_error)?;

    String::from_utf8(writer.into_inner()).map_err(write_error)
}

fn tag_name(name: &[u8]) -> Result<String, Error> {
    std::str::from_utf8(name)
        .map(str::to_string)
        .map_err(parse_error)
}

/// Decode the root's direct children into a tag-to-text record.
pub fn decode(text: &str) -> Result<FlatRecord, Error> {
    let mut reader = Reader::from_str(text);
    let mut record = FlatRecord::new();
    let mut depth = 0usize;
    let mut seen_root = false;
    let mut current: Option<(String, String)> = None;
    let mut collecting = false;

    loop {
        match reader.read_event().map_err(parse_error)? {
            Event::Start(e) => {
                if depth == 0 {
                    if seen_root {
                        return Err(parse_error("more than one root element"));
                    }
                    seen_root = true;
                }
                depth += 1;
                match depth {
                    2 => {
                        current = Some((tag_name(e.name().as_ref())?, String::new()));
                        collecting = true;
                    }
                    3 => collecting = false,
                    _ => {}
                }
            }
            Event::Empty(e) => match depth {
                0 if seen_root => return Err(parse_error("more than one root element")),
                0 => seen_root = true,
                1 => {
                    record.insert(tag_name(e.name().as_ref())?, String::new());
                }
                2 => collecting = false,
                _ => {}
            },
            Event::Text(t) if depth == 0 => {
                if !t.unescape().map_err(parse_error)?.trim().is_empty() {
                    return Err(parse_error("text outside the root element"));
                }
            }
            Event::Text(t) if depth == 2 && collecting => {
                if let Some((_, content)) = current.as_mut() {
                    content.push_str(&t.unescape().map_err(parse_error)?);
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(parse_error("text outside the root element"));
            }
            Event::CData(c) if depth == 2 && collecting => {
                if let Some((_, content)) = current.as_mut() {
                    content.push_str(std::str::from_utf8(&c).map_err(parse_error)?);
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    if let Some((key, content)) = current.take() {
                        record.insert(key, content);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !seen_root {
        return Err(parse_error("no root element"));
    }
    if depth != 0 {
        return Err(parse_error("unterminated element"));
    }

    Ok(record)
}

/// A codec for flat XML documents.
///
/// Encoding needs a map value. Decoding yields a map of string values.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlCodec;

impl Codec for XmlCodec {
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<Value, Error> {
        if !self.supports(format) {
            return Err(Error::UnsupportedFormat(format.clone()));
        }

        let text = std::str::from_utf8(bytes).map_err(parse_error)?;
        Ok(Value::from(decode(text)?))
    }

    fn encode(&self, value: &Value, format: &Format) -> Result<Bytes, Error> {
        if !self.supports(format) {
            return Err(Error::UnsupportedFormat(format.clone()));
        }

        let map = value.as_map().ok_or_else(|| {
            Error::type_validation(
                Format::XML,
                format!("expected a map, found {}", value.kind()),
            )
        })?;
        Ok(Bytes::from(encode(map)?))
    }

    fn supports(&self, format: &Format) -> bool {
        format == &Format::XML
    }
}
