//! Loading and holding the catalog table.
//!
//! The JSON table is validated once when it is loaded; after that the
//! catalog is read-only.
//!
//! # Example
//!
//! ```
//! use lbecat::{CatalogConfig, CatalogLoader};
//!
//! let input = r#"[{
//!     "title": "Ocean heat content",
//!     "authors": "D. Brown",
//!     "journal": "Geophysical Research Letters",
//!     "pubyear": "2020",
//!     "linkpub": "https://doi.org/10.1029/2020GL000001",
//!     "linkdata": [{"name": "Zenodo", "url": "https://zenodo.org/record/3"}],
//!     "description": "Upper ocean temperatures.",
//!     "subdiscipline": ["Oceanography"]
//! }]"#;
//!
//! let mut config = CatalogConfig::new();
//! config.set_require_doi(true);
//!
//! let catalog = CatalogLoader::new().with_config(config).load_str(input).unwrap();
//! assert_eq!(catalog.entries()[0].doi().unwrap(), "10.1029/2020GL000001");
//! ```

mod structure;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::config::CatalogConfig;
use crate::entry::CatalogEntry;
use crate::Result;
use structure::RawCatalogEntry;

/// The loaded, validated catalog.
///
/// Alongside the entries the catalog keeps a lowercased JSON rendering of
/// each one for free-text search.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    haystacks: Vec<String>,
    config: CatalogConfig,
}

impl Catalog {
    /// Builds a catalog from already decoded entries.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MalformedEntry` if `config` requires DOIs and an
    /// entry has none.
    pub fn from_entries(entries: Vec<CatalogEntry>, config: CatalogConfig) -> Result<Self> {
        if config.require_doi() {
            for entry in &entries {
                entry.doi()?;
            }
        }
        let haystacks = entries
            .iter()
            .map(CatalogEntry::search_haystack)
            .collect::<Result<Vec<_>>>()?;
        tracing::info!("Loaded catalog with {} entries", entries.len());
        Ok(Self {
            entries,
            haystacks,
            config,
        })
    }

    /// Parses a JSON table with the default configuration.
    pub fn from_json_str(input: &str) -> Result<Self> {
        CatalogLoader::new().load_str(input)
    }

    /// Reads a JSON table from a file with the default configuration.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        CatalogLoader::new().load_path(path)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Entries whose JSON rendering contains `text`, ignoring case.
    ///
    /// An empty `text` matches every entry.
    pub fn search(&self, text: &str) -> Vec<&CatalogEntry> {
        let needle = text.to_lowercase();
        self.entries
            .iter()
            .zip(&self.haystacks)
            .filter(|(_, haystack)| haystack.contains(&needle))
            .map(|(entry, _)| entry)
            .collect()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Loader for the JSON catalog table.
///
/// The table must be a JSON array of objects. Loading stops at the first
/// invalid entry.
#[derive(Debug, Clone, Default)]
pub struct CatalogLoader {
    config: CatalogConfig,
}

impl CatalogLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom configuration for the loaded catalog
    #[must_use]
    pub fn with_config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses a JSON table.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Json` if the input is not a JSON array
    /// - `CatalogError::InvalidCatalogData` if an entry is missing a field or
    ///   has a field of the wrong type
    /// - `CatalogError::MalformedEntry` if DOIs are required and one is missing
    pub fn load_str(&self, input: &str) -> Result<Catalog> {
        let values: Vec<serde_json::Value> = serde_json::from_str(input)?;
        self.load_values(values)
    }

    /// Reads and parses a JSON table from `reader`.
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Catalog> {
        let values: Vec<serde_json::Value> = serde_json::from_reader(reader)?;
        self.load_values(values)
    }

    /// Reads and parses a JSON table from the file at `path`.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<Catalog> {
        let file = File::open(path.as_ref())?;
        tracing::debug!("Reading catalog from {:?}", path.as_ref());
        self.load_reader(BufReader::new(file))
    }

    fn load_values(&self, values: Vec<serde_json::Value>) -> Result<Catalog> {
        let mut entries = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            let entry = RawCatalogEntry::from_value(index, value)?.into_entry(index, &self.config)?;
            entries.push(entry);
        }
        Catalog::from_entries(entries, self.config.clone())
    }
}
