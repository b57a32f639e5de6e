//! Streaming catalog parser.
//!
//! Makes exactly one forward pass over one event stream per document,
//! never buffering the event sequence and never revisiting an event. The
//! top-level loop reacts to `<medicine>` start tags only; each completed
//! record lands in the deduplicating [`Catalog`] accumulator. Any failure
//! is fatal to the whole parse: the streamer is consumed by
//! [`CatalogStreamer::build_catalog`], so a failed document never leaks a
//! partial record set.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::catalog::models::Catalog;
use crate::catalog::tags::{canonicalize, CatalogTag};

pub use cursor::{CatalogEvent, EventCursor, StartTag};
pub use error::CatalogError;

mod cursor;
mod error;
mod record;


/// Streaming parser for medicine catalog documents.
#[derive(Debug)]
pub struct CatalogStreamer<R: BufRead> {
    cursor: EventCursor<R>,
}

impl CatalogStreamer<BufReader<File>> {
    /// Open a catalog file for parsing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CatalogStreamer<R> {
    /// Create a streamer from a `BufRead` source.
    pub fn new(source: R) -> Self {
        Self {
            cursor: EventCursor::new(source),
        }
    }

    /// Consume the stream and build the deduplicated record set.
    pub fn build_catalog(mut self) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::new();
        loop {
            match self.cursor.next_event()? {
                CatalogEvent::Start(tag) => {
                    // The top-level scan reacts to <medicine> only; other
                    // names at this level are outside the record grammar
                    // and carry no vocabulary obligation.
                    if canonicalize(tag.name()) == CatalogTag::Medicine.canonical_name() {
                        let medicine = record::parse_medicine(&mut self.cursor, &tag)?;
                        debug!("assembled record {}", medicine.id);
                        if !catalog.insert(medicine) {
                            debug!("collapsed structurally equal duplicate record");
                        }
                    }
                }
                CatalogEvent::Eof => return Ok(catalog),
                _ => {}
            }
        }
    }
}
