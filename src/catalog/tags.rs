//! Catalog tag vocabulary.
//!
//! Element and attribute names are canonicalized (ASCII uppercase, hyphens
//! replaced with underscores) before lookup, so `<number-in-package>`,
//! `<Number-In-Package>` and `<NUMBER_IN_PACKAGE>` all map to the same
//! identifier. The vocabulary is closed: a canonical name outside the fixed
//! set is an `UnknownTag` error, never a silent fallback variant.

use std::fmt;
use std::str::FromStr;

use super::streamer::CatalogError;

/// Canonicalize a raw element or attribute name for vocabulary lookup.
pub fn canonicalize(name: &str) -> String {
    name.to_ascii_uppercase().replace('-', "_")
}

/// Element names understood by the catalog grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogTag {
    Medicine,
    Name,
    Pharm,
    Group,
    Analog,
    AnalogName,
    Version,
    Form,
    Certificate,
    Number,
    Issuance,
    Expiration,
    Package,
    Type,
    NumberInPackage,
    PricePerPackage,
    Dosage,
    DrugDosage,
    ReceptionMultiplicity,
}

impl CatalogTag {
    /// The canonical spelling of this tag.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::Medicine => "MEDICINE",
            Self::Name => "NAME",
            Self::Pharm => "PHARM",
            Self::Group => "GROUP",
            Self::Analog => "ANALOG",
            Self::AnalogName => "ANALOG_NAME",
            Self::Version => "VERSION",
            Self::Form => "FORM",
            Self::Certificate => "CERTIFICATE",
            Self::Number => "NUMBER",
            Self::Issuance => "ISSUANCE",
            Self::Expiration => "EXPIRATION",
            Self::Package => "PACKAGE",
            Self::Type => "TYPE",
            Self::NumberInPackage => "NUMBER_IN_PACKAGE",
            Self::PricePerPackage => "PRICE_PER_PACKAGE",
            Self::Dosage => "DOSAGE",
            Self::DrugDosage => "DRUG_DOSAGE",
            Self::ReceptionMultiplicity => "RECEPTION_MULTIPLICITY",
        }
    }

    /// Look up an already-canonicalized name.
    pub fn from_canonical(name: &str) -> Result<Self, CatalogError> {
        match name {
            "MEDICINE" => Ok(Self::Medicine),
            "NAME" => Ok(Self::Name),
            "PHARM" => Ok(Self::Pharm),
            "GROUP" => Ok(Self::Group),
            "ANALOG" => Ok(Self::Analog),
            "ANALOG_NAME" => Ok(Self::AnalogName),
            "VERSION" => Ok(Self::Version),
            "FORM" => Ok(Self::Form),
            "CERTIFICATE" => Ok(Self::Certificate),
            "NUMBER" => Ok(Self::Number),
            "ISSUANCE" => Ok(Self::Issuance),
            "EXPIRATION" => Ok(Self::Expiration),
            "PACKAGE" => Ok(Self::Package),
            "TYPE" => Ok(Self::Type),
            "NUMBER_IN_PACKAGE" => Ok(Self::NumberInPackage),
            "PRICE_PER_PACKAGE" => Ok(Self::PricePerPackage),
            "DOSAGE" => Ok(Self::Dosage),
            "DRUG_DOSAGE" => Ok(Self::DrugDosage),
            "RECEPTION_MULTIPLICITY" => Ok(Self::ReceptionMultiplicity),
            _ => Err(CatalogError::UnknownTag(name.to_string())),
        }
    }
}

impl fmt::Display for CatalogTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for CatalogTag {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical(&canonicalize(s))
    }
}

/// Attribute names read directly off start tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAttr {
    Id,
    Original,
}

impl CatalogAttr {
    /// The canonical spelling of this attribute.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Original => "ORIGINAL",
        }
    }
}
