//! Common test utilities for OAI-PMH record mapping tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use bioschemas_core::MapperConfig;
use chrono::NaiveDate;

/// Test case structure for OAI-PMH XML files
#[derive(Debug, Clone)]
pub struct OaiXmlTestCase {
    pub file_path: PathBuf,
    pub record_id: String,
}

impl OaiXmlTestCase {
    pub fn new(file_path: PathBuf) -> Self {
        let record_id = file_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();
        Self {
            file_path,
            record_id,
        }
    }

    pub fn filename(&self) -> &str {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown.xml")
    }

    pub fn read_xml_content(&self) -> Result<String, std::io::Error> {
        fs::read_to_string(&self.file_path)
    }

    pub fn read_xml_content_or_panic(&self) -> String {
        self.read_xml_content()
            .unwrap_or_else(|_| panic!("Failed to read XML file: {:?}", self.file_path))
    }
}

fn oai_xml_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/integration/test_data/oai_xml")
}

/// Get all OAI-PMH XML test files from the test data directory
pub fn get_oai_xml_test_cases() -> Vec<OaiXmlTestCase> {
    let xml_dir = oai_xml_dir();
    if !xml_dir.exists() {
        return Vec::new();
    }

    let mut xml_files = Vec::new();
    if let Ok(entries) = fs::read_dir(&xml_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("xml") {
                xml_files.push(path);
            }
        }
    }
    xml_files.sort();
    xml_files.into_iter().map(OaiXmlTestCase::new).collect()
}

/// Get a specific OAI-PMH XML test case by record id (file stem)
pub fn get_oai_xml_test_case(record_id: &str) -> Option<OaiXmlTestCase> {
    let xml_path = oai_xml_dir().join(format!("{record_id}.xml"));
    xml_path.exists().then(|| OaiXmlTestCase::new(xml_path))
}

/// Configuration with a pinned creation date so documents compare exactly
pub fn test_config() -> MapperConfig {
    MapperConfig::new()
        .with_publisher("biotea")
        .with_version("2.0")
        .with_metadata_id("https://biotea.github.io/bioschemas/{0}")
        .with_date_created(NaiveDate::from_ymd_opt(2019, 3, 1).unwrap())
}
