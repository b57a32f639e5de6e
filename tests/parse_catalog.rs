//! Integration tests for medistream
//!
//! These tests exercise the public API end to end: the file entry point,
//! multi-record documents and serde output of the parsed catalog.

use std::fs;

use medistream::{CatalogError, CatalogStreamer, Medicine};
use tempfile::tempdir;

const CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<medicines>
  <medicine id="p-101" original="true">
    <name>Aspirin</name>
    <pharm>Bayer</pharm>
    <group>analgesic</group>
    <analog><analog-name>Upsarin</analog-name></analog>
    <version>
      <form>tablets</form>
      <certificate>
        <number>RB-0001</number>
        <issuance>2021-03-15</issuance>
        <expiration>2026-03-15</expiration>
      </certificate>
      <package>
        <type>blister</type>
        <number-in-package>20</number-in-package>
        <price-per-package>4.75</price-per-package>
      </package>
      <dosage>
        <drug-dosage>500</drug-dosage>
        <reception-multiplicity>3</reception-multiplicity>
      </dosage>
    </version>
  </medicine>
  <medicine id="p-102">
    <name>Ibuprofen</name>
    <pharm>Reckitt</pharm>
    <group>NSAID</group>
  </medicine>
  <medicine id="p-102">
    <name>Ibuprofen</name>
    <pharm>Reckitt</pharm>
    <group>NSAID</group>
  </medicine>
</medicines>"#;

#[test]
fn parse_catalog_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("medicines.xml");
    fs::write(&path, CATALOG).unwrap();

    let catalog = CatalogStreamer::open(&path).unwrap().build_catalog().unwrap();

    // The repeated p-102 record collapses into one.
    assert_eq!(catalog.len(), 2);
    let aspirin = catalog
        .iter()
        .find(|medicine| medicine.id == "p-101")
        .unwrap();
    assert_eq!(aspirin.versions[0].package.price_per_package, 4.75);
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempdir().unwrap();
    let err = CatalogStreamer::open(dir.path().join("absent.xml")).unwrap_err();
    assert!(matches!(err, CatalogError::SourceUnavailable(_)));
}

#[test]
fn parse_failure_from_file_yields_no_records() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.xml");
    fs::write(
        &path,
        r#"<medicines><medicine id="b-1"><unheard-of/></medicine></medicines>"#,
    )
    .unwrap();

    let err = CatalogStreamer::open(&path).unwrap().build_catalog().unwrap_err();
    assert!(matches!(err, CatalogError::UnknownTag(name) if name == "UNHEARD_OF"));
}

#[test]
fn records_serialize_to_json_and_back() {
    let catalog = CatalogStreamer::new(CATALOG.as_bytes()).build_catalog().unwrap();
    let aspirin = catalog
        .iter()
        .find(|medicine| medicine.id == "p-101")
        .unwrap();

    let json = serde_json::to_string(aspirin).unwrap();
    assert!(json.contains("\"type\":\"blister\""));

    let round_tripped: Medicine = serde_json::from_str(&json).unwrap();
    assert_eq!(&round_tripped, aspirin);
}

#[test]
fn whole_catalog_serializes_as_a_sequence() {
    let catalog = CatalogStreamer::new(CATALOG.as_bytes()).build_catalog().unwrap();
    let json = serde_json::to_string(&catalog).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}
