//! Forward-only event cursor over the raw XML byte stream.
//!
//! The cursor adapts quick-xml's pull reader to the three structural event
//! kinds the record routines consume: start tag (with attributes), end tag
//! and text. Declarations, comments, processing instructions and DTD
//! content never reach the routines. Self-closing elements are expanded
//! into separate start and end events so an empty `<analog/>` takes the
//! same path as `<analog></analog>`.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::error::CatalogError;
use crate::catalog::tags::canonicalize;

/// A single structural event pulled from the cursor.
#[derive(Debug)]
pub enum CatalogEvent {
    /// Element start with its attributes.
    Start(StartTag),
    /// Element end, carrying the raw local name.
    End(String),
    /// Text content between tags, entity-unescaped and trimmed.
    Text(String),
    /// The event source is exhausted.
    Eof,
}

/// An element start tag with its attributes decoded to owned strings.
#[derive(Debug)]
pub struct StartTag {
    name: String,
    attributes: Vec<(String, String)>,
}

impl StartTag {
    /// Raw local name of the element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up an attribute value by canonical attribute name.
    ///
    /// Attribute names in the document follow the same case/separator
    /// normalization as element names.
    pub fn attribute(&self, canonical: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| canonicalize(key) == canonical)
            .map(|(_, value)| value.as_str())
    }
}

/// Forward-only cursor producing catalog events from a `BufRead` source.
#[derive(Debug)]
pub struct EventCursor<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
}

impl<R: BufRead> EventCursor<R> {
    /// Create a cursor over a byte source.
    pub fn new(source: R) -> Self {
        let mut reader = Reader::from_reader(source);
        let config = reader.config_mut();
        config.trim_text(true);
        config.expand_empty_elements = true;
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Pull the next structural event.
    pub fn next_event(&mut self) -> Result<CatalogEvent, CatalogError> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(e) => return Ok(CatalogEvent::Start(decode_start_tag(&e)?)),
                Event::End(e) => {
                    let name = std::str::from_utf8(e.local_name().as_ref())?.to_string();
                    return Ok(CatalogEvent::End(name));
                }
                Event::Text(t) => return Ok(CatalogEvent::Text(t.unescape()?.into_owned())),
                Event::CData(t) => {
                    return Ok(CatalogEvent::Text(std::str::from_utf8(&t)?.to_string()))
                }
                Event::Eof => return Ok(CatalogEvent::Eof),
                // Declarations, comments, PIs and DTDs are not structural.
                _ => {}
            }
        }
    }
}

fn decode_start_tag(e: &BytesStart) -> Result<StartTag, CatalogError> {
    let name = std::str::from_utf8(e.local_name().as_ref())?.to_string();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = std::str::from_utf8(&attr.value)?.to_string();
        attributes.push((key, value));
    }
    Ok(StartTag { name, attributes })
}
