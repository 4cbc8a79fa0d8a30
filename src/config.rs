//! Catalog configuration.
//!
//! # Example
//!
//! ```
//! use lbecat::CatalogConfig;
//!
//! let mut config = CatalogConfig::new();
//! config.set_author_list_length(5).set_require_doi(true);
//! assert_eq!(config.author_list_length(), 5);
//! ```

/// Number of authors shown on an entry card before the list is collapsed.
pub const DEFAULT_AUTHOR_LIST_LENGTH: usize = 10;

/// Prefix of the generated per-entry permalinks.
pub const DEFAULT_PERMALINK_BASE: &str = "./";

/// Configuration for loading and presenting a catalog.
///
/// # Defaults
///
/// - `author_list_length`: 10
/// - `require_doi`: `false`, entries without a DOI link are loaded and shown
///   with their raw publication link
/// - `permalink_base`: `"./"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Authors shown before the list collapses behind a "show all" control
    author_list_length: usize,
    /// Whether loading rejects entries whose publication link has no DOI
    require_doi: bool,
    /// Prefix for permalinks, joined with `?doi=<doi>`
    permalink_base: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogConfig {
    /// Creates a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            author_list_length: DEFAULT_AUTHOR_LIST_LENGTH,
            require_doi: false,
            permalink_base: DEFAULT_PERMALINK_BASE.to_string(),
        }
    }

    /// Sets the author truncation threshold
    pub fn set_author_list_length(&mut self, length: usize) -> &mut Self {
        self.author_list_length = length;
        self
    }

    /// Sets whether entries without a DOI link are rejected at load time
    pub fn set_require_doi(&mut self, require_doi: bool) -> &mut Self {
        self.require_doi = require_doi;
        self
    }

    /// Sets the permalink prefix
    pub fn set_permalink_base(&mut self, base: &str) -> &mut Self {
        self.permalink_base = base.to_string();
        self
    }

    pub fn author_list_length(&self) -> usize {
        self.author_list_length
    }

    pub fn require_doi(&self) -> bool {
        self.require_doi
    }

    pub fn permalink_base(&self) -> &str {
        &self.permalink_base
    }
}
