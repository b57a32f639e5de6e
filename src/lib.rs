//! # medistream - Streaming Medicine Catalog Reader
//!
//! `medistream` incrementally converts a stream of XML parse events into a
//! typed object graph of medicine records (name, manufacturer, therapeutic
//! group, analogs and versioned certificate/package/dosage data).
//!
//! ## Key Properties
//!
//! - **Streaming**: one forward pass over the event source, no buffering
//!   of the document, arbitrarily large catalogs in constant memory.
//! - **Closed vocabulary**: tag and attribute names are canonicalized
//!   (case- and separator-insensitive) and checked against a fixed set;
//!   unknown names fail the parse instead of being silently dropped.
//! - **Typed coercion**: certificate dates, package counts and prices are
//!   parsed into `chrono::NaiveDate`, `u32` and `f64` at read time;
//!   unparseable or empty values fail the parse.
//! - **Deduplicated result**: structurally equal records collapse to one.
//! - **All-or-nothing**: any error discards the whole parse; no partial
//!   record set is observable.
//!
//! ## Quick Start
//!
//! ```rust
//! use medistream::CatalogStreamer;
//!
//! let xml = r#"<?xml version="1.0"?>
//! <medicines>
//!   <medicine id="p-101" original="true">
//!     <name>Aspirin</name>
//!     <pharm>Bayer</pharm>
//!     <group>analgesic</group>
//!     <analog><analog-name>Upsarin</analog-name></analog>
//!     <version>
//!       <form>tablets</form>
//!       <certificate>
//!         <number>RB-0001</number>
//!         <issuance>2021-03-15</issuance>
//!         <expiration>2026-03-15</expiration>
//!       </certificate>
//!       <package>
//!         <type>blister</type>
//!         <number-in-package>20</number-in-package>
//!         <price-per-package>4.75</price-per-package>
//!       </package>
//!       <dosage>
//!         <drug-dosage>500</drug-dosage>
//!         <reception-multiplicity>3</reception-multiplicity>
//!       </dosage>
//!     </version>
//!   </medicine>
//! </medicines>"#;
//!
//! let catalog = CatalogStreamer::new(xml.as_bytes()).build_catalog()?;
//! assert_eq!(catalog.len(), 1);
//! let aspirin = catalog.iter().next().unwrap();
//! assert_eq!(aspirin.versions[0].package.number_in_package, 20);
//! # Ok::<(), medistream::CatalogError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`catalog::tags`] - the closed tag/attribute vocabulary and name
//!   canonicalization.
//! - [`catalog::models`] - the entity tree (`Medicine` down to `Dosage`)
//!   and the deduplicating `Catalog` accumulator.
//! - [`CatalogStreamer`] - the recursive-descent record builder driven by
//!   a forward-only event cursor over quick-xml.

pub mod catalog;

pub use catalog::{
    Analog, Catalog, CatalogError, CatalogEvent, CatalogStreamer, Certificate, Dosage,
    EventCursor, Medicine, Package, StartTag, Version,
};
