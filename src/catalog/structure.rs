//! Catalog data structures as read from the JSON table.
//!
//! Every field is optional here so that a missing or `null` field is reported
//! with the index of the offending entry instead of a generic decoding error.

use compact_str::CompactString;
use itertools::Itertools;
use serde::Deserialize;

use crate::config::CatalogConfig;
use crate::entry::{CatalogEntry, DatasetLink, PublicationYear};
use crate::{CatalogError, Result};

/// Structured raw data for one entry of the JSON table.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawCatalogEntry {
    title: Option<String>,
    authors: Option<String>,
    journal: Option<String>,
    pubyear: Option<PublicationYear>,
    linkpub: Option<String>,
    linkdata: Option<Vec<DatasetLink>>,
    description: Option<String>,
    linkcomment: Option<String>,
    tags: Option<Vec<CompactString>>,
    subdiscipline: Option<Vec<CompactString>>,
}

impl RawCatalogEntry {
    /// Decodes the entry at position `index` of the table.
    pub(crate) fn from_value(index: usize, value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| CatalogError::InvalidCatalogData {
            index,
            message: e.to_string(),
        })
    }

    /// Converts to a [`CatalogEntry`], checking required fields.
    ///
    /// `linkcomment` and `tags` may be absent and default to empty; every other
    /// field is required.
    pub(crate) fn into_entry(self, index: usize, config: &CatalogConfig) -> Result<CatalogEntry> {
        let missing = |field: &str| CatalogError::InvalidCatalogData {
            index,
            message: format!("missing field `{field}`"),
        };

        let entry = CatalogEntry {
            title: self.title.ok_or_else(|| missing("title"))?,
            authors: self.authors.ok_or_else(|| missing("authors"))?,
            journal: self.journal.ok_or_else(|| missing("journal"))?,
            publication_year: self.pubyear.ok_or_else(|| missing("pubyear"))?,
            publication_link: self.linkpub.ok_or_else(|| missing("linkpub"))?,
            dataset_links: self.linkdata.ok_or_else(|| missing("linkdata"))?,
            description: self.description.ok_or_else(|| missing("description"))?,
            comment: self.linkcomment.unwrap_or_default(),
            tags: self.tags.unwrap_or_default().into_iter().unique().collect(),
            subdiscipline: self
                .subdiscipline
                .ok_or_else(|| missing("subdiscipline"))?
                .into_iter()
                .unique()
                .collect(),
        };

        if let Some(link) = entry.dataset_links.iter().find(|link| link.name.is_empty()) {
            return Err(CatalogError::InvalidCatalogData {
                index,
                message: format!("dataset link '{}' has an empty name", link.url),
            });
        }

        if let Err(e) = entry.doi() {
            if config.require_doi() {
                return Err(e);
            }
            tracing::warn!("Entry {}: {}", index, e);
        }

        Ok(entry)
    }
}
