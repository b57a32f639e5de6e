//! # Medicine catalog module
//!
//! Streaming deserialization of medicine registry catalogs from XML into a
//! typed, deduplicated record set.
//!
//! ## Document structure
//!
//! ```text
//! root (any name)
//! └── medicine* (attributes: id, original?)
//!     ├── name, pharm, group (text)
//!     ├── analog*
//!     │   └── analog-name (text)
//!     └── version*
//!         ├── form (text)
//!         ├── certificate
//!         │   └── number, issuance, expiration
//!         ├── package
//!         │   └── type, number-in-package, price-per-package
//!         └── dosage
//!             └── drug-dosage, reception-multiplicity
//! ```
//!
//! Tag and attribute names may use hyphens or underscores interchangeably
//! and in any letter case; see [`tags`] for the canonicalization rules.

pub mod models;
pub mod tags;
mod streamer;

pub use models::{Analog, Catalog, Certificate, Dosage, Medicine, Package, Version};
pub use streamer::{CatalogError, CatalogEvent, CatalogStreamer, EventCursor, StartTag};
