//! Entity models for parsed catalog records.
//!
//! Every entity is default-constructed when its start tag is observed,
//! populated field by field while child events are consumed, and handed to
//! its parent when its own end tag arrives. Ownership is tree-shaped: a
//! medicine owns its versions, a version owns its certificate, package and
//! dosage, nothing is shared between records.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single medicine record assembled from the catalog stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Medicine {
    /// Registry identifier, sourced from the `id` attribute.
    pub id: String,

    /// Origin flag from the `original` attribute, or
    /// [`Medicine::DEFAULT_ORIGINAL`] when the attribute is absent.
    pub original: String,

    /// Display name.
    pub name: String,

    /// Manufacturer / pharma company name.
    pub pharm: String,

    /// Therapeutic group.
    pub group: String,

    /// Known analog preparations, in document order.
    pub analogs: Vec<Analog>,

    /// Registered versions of the preparation, in document order.
    pub versions: Vec<Version>,
}

impl Medicine {
    /// Origin flag used when the `original` attribute is absent.
    pub const DEFAULT_ORIGINAL: &'static str = "false";
}

impl fmt::Display for Medicine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {}): {} analog(s), {} version(s), original={}",
            self.id,
            self.name,
            self.pharm,
            self.group,
            self.analogs.len(),
            self.versions.len(),
            self.original,
        )
    }
}

/// An analog preparation of a medicine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Analog {
    /// Display name of the analog.
    pub name: String,
}

/// One registered version of a medicine.
///
/// A version without its certificate, package or dosage keeps the missing
/// sub-entities at their default values; the builder does not require them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    /// Dosage-form description (tablets, syrup, ...).
    pub form: String,

    /// Registration certificate.
    pub certificate: Certificate,

    /// Retail package description.
    pub package: Package,

    /// Dosage prescription.
    pub dosage: Dosage,
}

/// Registration certificate of a medicine version.
///
/// `issuance <= expiration` is expected of well-formed registry data but is
/// not validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Certificate {
    /// Registration number.
    pub number: String,

    /// Issuance date.
    pub issuance: NaiveDate,

    /// Expiration date.
    pub expiration: NaiveDate,
}

/// Retail package description of a medicine version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Package {
    /// Package type description (blister, bottle, ...).
    #[serde(rename = "type")]
    pub kind: String,

    /// Count of dosage units per package.
    pub number_in_package: u32,

    /// Price per package.
    pub price_per_package: f64,
}

// Structural equality over the price bits keeps Eq/Hash coherent for set
// membership even for values like NaN that f64 comparison would reject.
impl PartialEq for Package {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.number_in_package == other.number_in_package
            && self.price_per_package.to_bits() == other.price_per_package.to_bits()
    }
}

impl Eq for Package {}

impl Hash for Package {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.number_in_package.hash(state);
        self.price_per_package.to_bits().hash(state);
    }
}

/// Dosage prescription of a medicine version.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dosage {
    /// Dose amount, unit implied by the domain.
    pub dose: f64,

    /// Doses per administration.
    pub reception_multiplicity: u32,
}

impl PartialEq for Dosage {
    fn eq(&self, other: &Self) -> bool {
        self.dose.to_bits() == other.dose.to_bits()
            && self.reception_multiplicity == other.reception_multiplicity
    }
}

impl Eq for Dosage {}

impl Hash for Dosage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dose.to_bits().hash(state);
        self.reception_multiplicity.hash(state);
    }
}

/// Deduplicating accumulator for completed medicine records.
///
/// Set semantics by full structural equality: inserting a record equal to
/// an already-present one is a no-op, and insertion order is not observable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    medicines: HashSet<Medicine>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a completed record. Returns `false` when a structurally equal
    /// record was already present.
    pub(crate) fn insert(&mut self, medicine: Medicine) -> bool {
        self.medicines.insert(medicine)
    }

    /// Number of unique records.
    pub fn len(&self) -> usize {
        self.medicines.len()
    }

    /// Whether the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    /// Whether a structurally equal record is present.
    pub fn contains(&self, medicine: &Medicine) -> bool {
        self.medicines.contains(medicine)
    }

    /// Iterate over the records.
    pub fn iter(&self) -> impl Iterator<Item = &Medicine> {
        self.medicines.iter()
    }

    /// Read-only view of the underlying set.
    pub fn medicines(&self) -> &HashSet<Medicine> {
        &self.medicines
    }
}

impl IntoIterator for Catalog {
    type Item = Medicine;
    type IntoIter = std::collections::hash_set::IntoIter<Medicine>;

    fn into_iter(self) -> Self::IntoIter {
        self.medicines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Medicine;
    type IntoIter = std::collections::hash_set::Iter<'a, Medicine>;

    fn into_iter(self) -> Self::IntoIter {
        self.medicines.iter()
    }
}
