//! Recursive-descent routines, one per composite catalog entity.
//!
//! Each routine is entered just after its element's start tag was observed
//! and consumes events until it sees the matching end tag, at which point
//! it returns the assembled entity. Nested composites are handled by
//! recursing into the child's routine; leaf fields capture the text event
//! that follows their start tag and coerce it to the field's type. A name
//! that is valid vocabulary but not expected inside the current entity is
//! skipped without touching any field; a name outside the vocabulary is a
//! hard `UnknownTag` failure.

use std::io::BufRead;

use chrono::NaiveDate;
use log::warn;

use super::cursor::{CatalogEvent, EventCursor, StartTag};
use super::error::CatalogError;
use crate::catalog::models::{Analog, Certificate, Dosage, Medicine, Package, Version};
use crate::catalog::tags::{CatalogAttr, CatalogTag};

pub(super) fn parse_medicine<R: BufRead>(
    cursor: &mut EventCursor<R>,
    start: &StartTag,
) -> Result<Medicine, CatalogError> {
    let id = start
        .attribute(CatalogAttr::Id.canonical_name())
        .map(str::to_string)
        .ok_or_else(|| {
            CatalogError::MalformedContent("missing required attribute id on <medicine>".to_string())
        })?;
    let original = start
        .attribute(CatalogAttr::Original.canonical_name())
        .unwrap_or(Medicine::DEFAULT_ORIGINAL)
        .to_string();
    let mut medicine = Medicine {
        id,
        original,
        ..Medicine::default()
    };
    // name/pharm/group may be seeded from same-named attributes; child
    // elements overwrite them below.
    if let Some(value) = start.attribute(CatalogTag::Name.canonical_name()) {
        medicine.name = value.to_string();
    }
    if let Some(value) = start.attribute(CatalogTag::Pharm.canonical_name()) {
        medicine.pharm = value.to_string();
    }
    if let Some(value) = start.attribute(CatalogTag::Group.canonical_name()) {
        medicine.group = value.to_string();
    }

    loop {
        match cursor.next_event()? {
            CatalogEvent::Start(tag) => match tag.name().parse::<CatalogTag>()? {
                CatalogTag::Name => {
                    medicine.name = read_text(cursor, CatalogTag::Name)?.unwrap_or_default();
                }
                CatalogTag::Pharm => {
                    medicine.pharm = read_text(cursor, CatalogTag::Pharm)?.unwrap_or_default();
                }
                CatalogTag::Group => {
                    medicine.group = read_text(cursor, CatalogTag::Group)?.unwrap_or_default();
                }
                CatalogTag::Analog => medicine.analogs.push(parse_analog(cursor)?),
                CatalogTag::Version => medicine.versions.push(parse_version(cursor)?),
                other => skip_unexpected(other, CatalogTag::Medicine),
            },
            CatalogEvent::End(name) => {
                if name.parse::<CatalogTag>()? == CatalogTag::Medicine {
                    return Ok(medicine);
                }
            }
            CatalogEvent::Text(_) => {}
            CatalogEvent::Eof => return Err(premature_end(CatalogTag::Medicine)),
        }
    }
}

fn parse_analog<R: BufRead>(cursor: &mut EventCursor<R>) -> Result<Analog, CatalogError> {
    let mut analog = Analog::default();
    loop {
        match cursor.next_event()? {
            CatalogEvent::Start(tag) => match tag.name().parse::<CatalogTag>()? {
                CatalogTag::AnalogName => {
                    analog.name = read_text(cursor, CatalogTag::AnalogName)?.unwrap_or_default();
                }
                other => skip_unexpected(other, CatalogTag::Analog),
            },
            CatalogEvent::End(name) => {
                if name.parse::<CatalogTag>()? == CatalogTag::Analog {
                    return Ok(analog);
                }
            }
            CatalogEvent::Text(_) => {}
            CatalogEvent::Eof => return Err(premature_end(CatalogTag::Analog)),
        }
    }
}

fn parse_version<R: BufRead>(cursor: &mut EventCursor<R>) -> Result<Version, CatalogError> {
    let mut version = Version::default();
    loop {
        match cursor.next_event()? {
            CatalogEvent::Start(tag) => match tag.name().parse::<CatalogTag>()? {
                CatalogTag::Form => {
                    version.form = read_text(cursor, CatalogTag::Form)?.unwrap_or_default();
                }
                CatalogTag::Certificate => version.certificate = parse_certificate(cursor)?,
                CatalogTag::Package => version.package = parse_package(cursor)?,
                CatalogTag::Dosage => version.dosage = parse_dosage(cursor)?,
                other => skip_unexpected(other, CatalogTag::Version),
            },
            CatalogEvent::End(name) => {
                if name.parse::<CatalogTag>()? == CatalogTag::Version {
                    return Ok(version);
                }
            }
            CatalogEvent::Text(_) => {}
            CatalogEvent::Eof => return Err(premature_end(CatalogTag::Version)),
        }
    }
}

fn parse_certificate<R: BufRead>(cursor: &mut EventCursor<R>) -> Result<Certificate, CatalogError> {
    let mut certificate = Certificate::default();
    loop {
        match cursor.next_event()? {
            CatalogEvent::Start(tag) => match tag.name().parse::<CatalogTag>()? {
                CatalogTag::Number => {
                    certificate.number =
                        read_text(cursor, CatalogTag::Number)?.unwrap_or_default();
                }
                CatalogTag::Issuance => {
                    certificate.issuance =
                        coerce_date(CatalogTag::Issuance, read_text(cursor, CatalogTag::Issuance)?)?;
                }
                CatalogTag::Expiration => {
                    certificate.expiration = coerce_date(
                        CatalogTag::Expiration,
                        read_text(cursor, CatalogTag::Expiration)?,
                    )?;
                }
                other => skip_unexpected(other, CatalogTag::Certificate),
            },
            CatalogEvent::End(name) => {
                if name.parse::<CatalogTag>()? == CatalogTag::Certificate {
                    return Ok(certificate);
                }
            }
            CatalogEvent::Text(_) => {}
            CatalogEvent::Eof => return Err(premature_end(CatalogTag::Certificate)),
        }
    }
}

fn parse_package<R: BufRead>(cursor: &mut EventCursor<R>) -> Result<Package, CatalogError> {
    let mut package = Package::default();
    loop {
        match cursor.next_event()? {
            CatalogEvent::Start(tag) => match tag.name().parse::<CatalogTag>()? {
                CatalogTag::Type => {
                    package.kind = read_text(cursor, CatalogTag::Type)?.unwrap_or_default();
                }
                CatalogTag::NumberInPackage => {
                    package.number_in_package = coerce_int(
                        CatalogTag::NumberInPackage,
                        read_text(cursor, CatalogTag::NumberInPackage)?,
                    )?;
                }
                CatalogTag::PricePerPackage => {
                    package.price_per_package = coerce_float(
                        CatalogTag::PricePerPackage,
                        read_text(cursor, CatalogTag::PricePerPackage)?,
                    )?;
                }
                other => skip_unexpected(other, CatalogTag::Package),
            },
            CatalogEvent::End(name) => {
                if name.parse::<CatalogTag>()? == CatalogTag::Package {
                    return Ok(package);
                }
            }
            CatalogEvent::Text(_) => {}
            CatalogEvent::Eof => return Err(premature_end(CatalogTag::Package)),
        }
    }
}

fn parse_dosage<R: BufRead>(cursor: &mut EventCursor<R>) -> Result<Dosage, CatalogError> {
    let mut dosage = Dosage::default();
    loop {
        match cursor.next_event()? {
            CatalogEvent::Start(tag) => match tag.name().parse::<CatalogTag>()? {
                CatalogTag::DrugDosage => {
                    dosage.dose = coerce_float(
                        CatalogTag::DrugDosage,
                        read_text(cursor, CatalogTag::DrugDosage)?,
                    )?;
                }
                CatalogTag::ReceptionMultiplicity => {
                    dosage.reception_multiplicity = coerce_int(
                        CatalogTag::ReceptionMultiplicity,
                        read_text(cursor, CatalogTag::ReceptionMultiplicity)?,
                    )?;
                }
                other => skip_unexpected(other, CatalogTag::Dosage),
            },
            CatalogEvent::End(name) => {
                if name.parse::<CatalogTag>()? == CatalogTag::Dosage {
                    return Ok(dosage);
                }
            }
            CatalogEvent::Text(_) => {}
            CatalogEvent::Eof => return Err(premature_end(CatalogTag::Dosage)),
        }
    }
}

/// Capture the text content of a leaf field.
///
/// The very next event after the field's start tag is its text; for an
/// empty field (start tag immediately followed by end tag) the captured
/// value is the absence sentinel `None`. The end tag consumed here, or left
/// for the caller's loop when text was present, is swallowed either way.
fn read_text<R: BufRead>(
    cursor: &mut EventCursor<R>,
    field: CatalogTag,
) -> Result<Option<String>, CatalogError> {
    match cursor.next_event()? {
        CatalogEvent::Text(text) => Ok(Some(text)),
        CatalogEvent::End(_) => Ok(None),
        CatalogEvent::Start(tag) => {
            warn!("expected text inside <{}>, found <{}>", field, tag.name());
            Ok(None)
        }
        CatalogEvent::Eof => Err(premature_end(field)),
    }
}

fn coerce_int(field: CatalogTag, text: Option<String>) -> Result<u32, CatalogError> {
    let text = require_text(field, text)?;
    text.parse::<u32>()
        .map_err(|_| malformed(field, &text, "a non-negative integer"))
}

fn coerce_float(field: CatalogTag, text: Option<String>) -> Result<f64, CatalogError> {
    let text = require_text(field, text)?;
    text.parse::<f64>().map_err(|_| malformed(field, &text, "a number"))
}

fn coerce_date(field: CatalogTag, text: Option<String>) -> Result<NaiveDate, CatalogError> {
    let text = require_text(field, text)?;
    text.parse::<NaiveDate>()
        .map_err(|_| malformed(field, &text, "an ISO calendar date"))
}

fn require_text(field: CatalogTag, text: Option<String>) -> Result<String, CatalogError> {
    text.ok_or_else(|| {
        CatalogError::MalformedContent(format!("empty <{}> where a value is required", field))
    })
}

fn malformed(field: CatalogTag, value: &str, expected: &str) -> CatalogError {
    CatalogError::MalformedContent(format!(
        "cannot read {:?} in <{}> as {}",
        value, field, expected
    ))
}

fn premature_end(element: CatalogTag) -> CatalogError {
    CatalogError::PrematureEndOfStream(element.to_string())
}

fn skip_unexpected(tag: CatalogTag, context: CatalogTag) {
    warn!("ignoring <{}> inside <{}>", tag, context);
}
