//! A small library for browsing, searching and filtering a catalog of
//! "Lead by Example" dataset entries.
//!
//! `lbecat` loads a static JSON table of publications with their datasets
//! and turns UI interactions (typing into a search box, clicking a filter
//! button, opening a permalink) into the subset of entries to display, along
//! with the filter controls and their counts.
//!
//! # Key Features
//!
//! - **Validated loading**: the JSON table is checked once at startup and
//!   rejected with a precise error instead of failing at render time.
//! - **Pure selection transitions**: every UI event maps to a complete new
//!   [`SelectionState`], so filtering can be tested without a UI.
//! - **Facets with counts**: distinct repositories, subdisciplines and
//!   journals, sorted case-insensitively with an `"All"` option first.
//! - **Render-ready view models**: entry cards with DOI, permalink,
//!   repository badges and collapsible author lists.
//!
//! # Basic Usage
//!
//! ```rust
//! use lbecat::{Catalog, CatalogFilterEngine, FilterEvent, QueryParams};
//!
//! let json = r#"[{
//!     "title": "Glacier velocities",
//!     "authors": "A. Smith, B. Jones",
//!     "journal": "Nature",
//!     "pubyear": 2021,
//!     "linkpub": "https://doi.org/10.1000/glacier",
//!     "linkdata": [{"name": "Zenodo", "url": "https://zenodo.org/record/1"}],
//!     "description": "Surface velocities of glaciers.",
//!     "linkcomment": "",
//!     "tags": ["glaciology"],
//!     "subdiscipline": ["Glaciology"]
//! }]"#;
//!
//! let catalog = Catalog::from_json_str(json).unwrap();
//! let mut engine = CatalogFilterEngine::new(catalog, QueryParams::parse("?text=glacier"));
//! assert_eq!(engine.visible().len(), 1);
//! assert_eq!(engine.result_label().as_deref(), Some("1 entry found..."));
//!
//! engine.dispatch(FilterEvent::RepoSelected("Zenodo".to_string()));
//! assert_eq!(engine.visible()[0].title, "Glacier velocities");
//! ```
//!
//! # Error Handling
//!
//! The library uses a custom [`Result`] type that wraps [`CatalogError`]:
//!
//! ```rust
//! use lbecat::{Catalog, CatalogError};
//!
//! match Catalog::from_json_str(r#"[{"title": "Untitled"}]"#) {
//!     Ok(catalog) => println!("Loaded {} entries", catalog.len()),
//!     Err(CatalogError::InvalidCatalogData { index, message }) => {
//!         eprintln!("Entry {index} is invalid: {message}")
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

pub mod authors;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod entry;
pub mod facets;
pub mod query;
mod regex;
pub mod selection;
mod utils;
pub mod view;

#[cfg(test)]
mod fixtures;

// Reexports
pub use authors::{AuthorList, AuthorToggle};
pub use catalog::{Catalog, CatalogLoader};
pub use config::CatalogConfig;
pub use engine::CatalogFilterEngine;
pub use entry::{CatalogEntry, DatasetLink, PublicationYear};
pub use facets::{DerivedLists, FacetKind};
pub use query::QueryParams;
pub use selection::{ALL, FilterEvent, FilterMode, SelectionState};
pub use view::{CatalogPage, EntryView, FacetGroup, FilterButton};

/// A specialized Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Represents errors that can occur while loading or reading the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog data: entry {index} - {message}")]
    InvalidCatalogData { index: usize, message: String },

    #[error("Malformed entry: \"{title}\" has no DOI in publication link '{link}'")]
    MalformedEntry { title: String, link: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
