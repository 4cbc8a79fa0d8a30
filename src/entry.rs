//! Catalog entries as stored in the JSON table.
//!
//! Field names follow the data file (`pubyear`, `linkpub`, `linkdata`,
//! `linkcomment`), so serializing an entry reproduces its source record.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::{extract_doi, sorted_distinct};
use crate::{CatalogError, Result};

/// A named link to a dataset, e.g. a Zenodo record or a GitHub repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetLink {
    /// Repository name, used as the repository filter value
    pub name: CompactString,
    pub url: String,
}

/// Publication year, which the data file stores either as a number or as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublicationYear {
    Year(i64),
    Text(String),
}

impl fmt::Display for PublicationYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicationYear::Year(year) => write!(f, "{year}"),
            PublicationYear::Text(text) => f.write_str(text),
        }
    }
}

/// A single publication with its datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    /// Author names separated by `", "`
    pub authors: String,
    pub journal: String,
    #[serde(rename = "pubyear")]
    pub publication_year: PublicationYear,
    /// Link to the publication, expected to contain `doi.org/<doi>`
    #[serde(rename = "linkpub")]
    pub publication_link: String,
    #[serde(rename = "linkdata")]
    pub dataset_links: Vec<DatasetLink>,
    pub description: String,
    #[serde(rename = "linkcomment")]
    pub comment: String,
    pub tags: Vec<CompactString>,
    pub subdiscipline: Vec<CompactString>,
}

impl CatalogEntry {
    /// Returns the DOI of the publication, everything after `doi.org/` in
    /// the publication link.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MalformedEntry`] if the link carries no DOI.
    pub fn doi(&self) -> Result<&str> {
        extract_doi(&self.publication_link).ok_or_else(|| CatalogError::MalformedEntry {
            title: self.title.clone(),
            link: self.publication_link.clone(),
        })
    }

    /// Distinct names of the repositories holding this entry's datasets,
    /// sorted case-insensitively.
    pub fn repository_names(&self) -> Vec<&str> {
        sorted_distinct(self.dataset_links.iter().map(|link| link.name.as_str()))
    }

    /// Whether one of the dataset links is hosted by `repository`.
    pub fn has_repository(&self, repository: &str) -> bool {
        self.dataset_links.iter().any(|link| link.name == repository)
    }

    /// Whether the entry belongs to `subdiscipline`.
    pub fn in_subdiscipline(&self, subdiscipline: &str) -> bool {
        self.subdiscipline.iter().any(|s| s == subdiscipline)
    }

    /// Lowercased JSON rendering of the whole entry, used for free-text search.
    pub(crate) fn search_haystack(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?.to_lowercase())
    }
}
