//! Particle data sources.
//!
//! Generation never reaches for a global catalog: callers hand in a
//! [`ParticleSource`], which makes a stub source a drop-in for tests.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{TableError, TableResult};
use crate::record::ParticleRecord;

/// Read-only access to a finite collection of particle records.
pub trait ParticleSource {
    /// All records, in the source's own enumeration order.
    fn find_all(&self) -> TableResult<Vec<ParticleRecord>>;
}

/// In-memory source.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<ParticleRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<ParticleRecord>) -> Self {
        Self { records }
    }
}

impl ParticleSource for StaticSource {
    fn find_all(&self) -> TableResult<Vec<ParticleRecord>> {
        Ok(self.records.clone())
    }
}

/// A JSON file holding an array of particle objects.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse catalog text that has already been read.
    pub fn parse(path: &Path, contents: &str) -> TableResult<Vec<ParticleRecord>> {
        let entries: Vec<CatalogEntry> =
            serde_json::from_str(contents).map_err(|source| TableError::CatalogParse {
                path: path.to_path_buf(),
                source,
            })?;
        entries.into_iter().map(CatalogEntry::into_record).collect()
    }
}

impl ParticleSource for JsonCatalog {
    fn find_all(&self) -> TableResult<Vec<ParticleRecord>> {
        if !self.path.is_file() {
            return Err(TableError::catalog_unavailable(&self.path));
        }

        debug!(path = %self.path.display(), "Reading particle catalog");
        let contents = std::fs::read_to_string(&self.path)?;
        let records = Self::parse(&self.path, &contents)?;
        info!(
            path = %self.path.display(),
            particles = records.len(),
            "Loaded particle catalog"
        );
        Ok(records)
    }
}

/// Catalog entry before required fields are checked.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(alias = "id")]
    pdgid: i64,
    #[serde(default)]
    mass: Option<f64>,
    #[serde(default)]
    mass_upper: Option<f64>,
    #[serde(default)]
    mass_lower: Option<f64>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    width_upper: Option<f64>,
    #[serde(default)]
    width_lower: Option<f64>,
    #[serde(default, rename = "I", alias = "isospin")]
    isospin: Option<f64>,
    #[serde(default, rename = "G", alias = "g_parity")]
    g_parity: Option<i32>,
    #[serde(default, rename = "C", alias = "c_parity")]
    c_parity: Option<i32>,
    #[serde(default)]
    name: Option<String>,
}

impl CatalogEntry {
    fn into_record(self) -> TableResult<ParticleRecord> {
        let pdgid = self.pdgid;
        let missing = |field| TableError::MissingRequiredField { pdgid, field };

        let g_parity = self.g_parity.ok_or_else(|| missing("G"))?;
        let c_parity = self.c_parity.ok_or_else(|| missing("C"))?;
        let name = self.name.ok_or_else(|| missing("name"))?;
        if name.is_empty() {
            return Err(TableError::EmptyName { pdgid });
        }
        if name.chars().any(char::is_control) {
            return Err(TableError::ControlCharacterInName { pdgid });
        }

        Ok(ParticleRecord {
            pdgid,
            mass: self.mass,
            mass_upper: self.mass_upper,
            mass_lower: self.mass_lower,
            width: self.width,
            width_upper: self.width_upper,
            width_lower: self.width_lower,
            isospin: self.isospin,
            g_parity,
            c_parity,
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CATALOG: &str = r#"[
        {"pdgid": 22, "name": "gamma", "mass": 0.0, "I": null, "G": -1, "C": 1},
        {"id": -211, "name": "pi-", "mass": 139.57039, "mass_upper": 0.00018,
         "mass_lower": 0.00018, "width": 2.5284e-14, "I": 1.0, "G": -1, "C": 5,
         "charge": -1, "latex": "\\pi^{-}"}
    ]"#;

    #[test]
    fn test_parse_catalog_entries() {
        let records = JsonCatalog::parse(Path::new("catalog.json"), CATALOG).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pdgid, 22);
        assert_eq!(records[0].mass, Some(0.0));
        assert_eq!(records[0].isospin, None);
        assert_eq!(records[1].pdgid, -211);
        assert_eq!(records[1].width, Some(2.5284e-14));
        assert_eq!(records[1].width_upper, None);
        assert_eq!(records[1].c_parity, 5);
        assert_eq!(records[1].name, "pi-");
    }

    #[test]
    fn test_missing_parity_fails_fast() {
        let contents = r#"[{"pdgid": 22, "name": "gamma", "G": -1}]"#;
        match JsonCatalog::parse(Path::new("catalog.json"), contents) {
            Err(TableError::MissingRequiredField { pdgid, field }) => {
                assert_eq!(pdgid, 22);
                assert_eq!(field, "C");
            }
            other => panic!("Expected MissingRequiredField, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let contents = r#"[{"pdgid": 22, "name": "", "G": -1, "C": 1}]"#;
        assert!(matches!(
            JsonCatalog::parse(Path::new("catalog.json"), contents),
            Err(TableError::EmptyName { pdgid: 22 })
        ));
    }

    #[test]
    fn test_control_character_in_name_is_rejected() {
        let contents = r#"[{"pdgid": 22, "name": "gam\nma", "G": -1, "C": 1}]"#;
        assert!(matches!(
            JsonCatalog::parse(Path::new("catalog.json"), contents),
            Err(TableError::ControlCharacterInName { pdgid: 22 })
        ));
    }

    #[test]
    fn test_malformed_catalog() {
        let err = JsonCatalog::parse(Path::new("bad.json"), "{ not json").unwrap_err();
        assert!(matches!(err, TableError::CatalogParse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_find_all_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("particles.json");
        std::fs::write(&path, CATALOG).unwrap();

        let records = JsonCatalog::new(&path).find_all().unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.pdgid).collect();
        assert_eq!(ids, vec![22, -211]);
    }

    #[test]
    fn test_missing_catalog_is_unavailable() {
        let temp = TempDir::new().unwrap();
        let err = JsonCatalog::new(temp.path().join("absent.json"))
            .find_all()
            .unwrap_err();

        assert!(err.is_catalog_unavailable());
        assert!(err.to_string().contains("--catalog"));
    }

    #[test]
    fn test_static_source_returns_records_in_order() {
        let source = StaticSource::new(vec![
            ParticleRecord::new(2212, 5, 5, "p"),
            ParticleRecord::new(2112, 5, 5, "n"),
        ]);
        let names: Vec<String> = source.find_all().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["p", "n"]);
    }
}
