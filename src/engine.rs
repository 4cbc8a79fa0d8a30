//! The filter engine: from catalog, page parameters and selection to the
//! visible entries and the filter controls.
//!
//! # Example
//!
//! ```
//! use lbecat::{Catalog, CatalogFilterEngine, FacetKind, QueryParams};
//!
//! let json = r#"[{
//!     "title": "Ambient seismic noise",
//!     "authors": "E. Garcia",
//!     "journal": "Nature Physics",
//!     "pubyear": 2019,
//!     "linkpub": "https://doi.org/10.1038/nphys1234",
//!     "linkdata": [{"name": "github", "url": "https://github.com/example/noise"}],
//!     "description": "Cross-correlations.",
//!     "subdiscipline": ["Seismology"]
//! }]"#;
//!
//! let catalog = Catalog::from_json_str(json).unwrap();
//! let engine = CatalogFilterEngine::new(catalog, QueryParams::parse("?doi=10.1038/nphys1234"));
//! assert_eq!(engine.visible().len(), 1);
//!
//! let labels: Vec<_> = engine
//!     .facet_buttons(FacetKind::Repository)
//!     .iter()
//!     .map(|button| button.label())
//!     .collect();
//! assert_eq!(labels, vec!["All (1)", "github (1)"]);
//! ```

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;
use crate::facets::{DerivedLists, FacetKind};
use crate::query::QueryParams;
use crate::selection::{FilterEvent, FilterMode, SelectionState};
use crate::view::{CatalogPage, EntryView, FacetGroup, FilterButton};

/// Computes what the catalog page shows.
///
/// The engine owns the catalog, the parameters the page was opened with and
/// the single current [`SelectionState`].
#[derive(Debug, Clone)]
pub struct CatalogFilterEngine {
    catalog: Catalog,
    query: QueryParams,
    state: SelectionState,
}

impl CatalogFilterEngine {
    /// Creates an engine whose state is initialised from `query`.
    pub fn new(catalog: Catalog, query: QueryParams) -> Self {
        let state = SelectionState::initial(&query);
        tracing::debug!("Initial selection {:?}", state);
        Self {
            catalog,
            query,
            state,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Applies a UI event, replacing the current state.
    pub fn dispatch(&mut self, event: FilterEvent) -> &SelectionState {
        self.state = self.state.apply(event);
        tracing::debug!("Selection changed to {:?}", self.state);
        &self.state
    }

    /// Replaces the current state wholesale.
    pub fn set_state(&mut self, state: SelectionState) {
        self.state = state;
    }

    /// Entries visible under the current state, in catalog order.
    pub fn visible(&self) -> Vec<&CatalogEntry> {
        self.visible_for(&self.state)
    }

    /// Entries visible under `state`, in catalog order.
    ///
    /// An `"All"` repository or subdiscipline filter shows the whole catalog
    /// whatever the mode. Otherwise the mode picks the predicate; DOI mode
    /// matches against the page's `doi` parameter and matches nothing when
    /// there is none.
    pub fn visible_for(&self, state: &SelectionState) -> Vec<&CatalogEntry> {
        if state.shows_everything() {
            return self.catalog.iter().collect();
        }

        let visible = match state.mode {
            FilterMode::None => Vec::new(),
            FilterMode::Text => self.catalog.search(&state.search_text),
            FilterMode::Repo => self.facet_matches(FacetKind::Repository, &state.repo_filter),
            FilterMode::Subdiscipline => {
                self.facet_matches(FacetKind::Subdiscipline, &state.subd_filter)
            }
            FilterMode::Journal => self.facet_matches(FacetKind::Journal, &state.journal_filter),
            FilterMode::Doi => match self.query.doi.as_deref() {
                Some(doi) => self
                    .catalog
                    .iter()
                    .filter(|entry| entry.publication_link.contains(doi))
                    .collect(),
                None => Vec::new(),
            },
        };
        tracing::debug!("{} of {} entries visible", visible.len(), self.catalog.len());
        visible
    }

    fn facet_matches(&self, kind: FacetKind, value: &str) -> Vec<&CatalogEntry> {
        self.catalog
            .iter()
            .filter(|entry| kind.matches(entry, value))
            .collect()
    }

    /// The result counter of the current state.
    pub fn result_label(&self) -> Option<String> {
        self.result_label_for(&self.state)
    }

    /// The result counter shown next to the search box.
    ///
    /// Only text searches have one: empty for an empty search, otherwise
    /// `"1 entry found..."` or `"{n} entries found..."`.
    pub fn result_label_for(&self, state: &SelectionState) -> Option<String> {
        if state.mode != FilterMode::Text || state.shows_everything() {
            return None;
        }
        if state.search_text.is_empty() {
            return Some(String::new());
        }
        Some(match self.visible_for(state).len() {
            1 => "1 entry found...".to_string(),
            n => format!("{n} entries found..."),
        })
    }

    /// Distinct repositories, subdisciplines and journals of the catalog.
    pub fn derived_lists(&self) -> DerivedLists<'_> {
        DerivedLists::from_catalog(&self.catalog)
    }

    /// Number of catalog entries with `value` for `kind`.
    pub fn count(&self, kind: FacetKind, value: &str) -> usize {
        kind.count(&self.catalog, value)
    }

    /// Numbered buttons for every value of `kind`, `"All"` first.
    pub fn facet_buttons(&self, kind: FacetKind) -> Vec<FilterButton<'_>> {
        self.buttons_from(&self.derived_lists(), kind)
    }

    fn buttons_from<'a>(&'a self, lists: &DerivedLists<'a>, kind: FacetKind) -> Vec<FilterButton<'a>> {
        lists
            .get(kind)
            .iter()
            .map(|&name| FilterButton::new(kind, name, &self.state).with_count(self.count(kind, name)))
            .collect()
    }

    /// View model of a single entry under the current state.
    pub fn entry_view<'a>(&'a self, entry: &'a CatalogEntry) -> EntryView<'a> {
        EntryView::new(entry, &self.state, self.catalog.config())
    }

    /// The complete page for the current state.
    pub fn page(&self) -> CatalogPage<'_> {
        let lists = self.derived_lists();
        let facets = FacetKind::KINDS
            .into_iter()
            .map(|kind| FacetGroup {
                kind,
                heading: kind.heading(),
                buttons: self.buttons_from(&lists, kind),
            })
            .collect();

        CatalogPage {
            search_text: &self.state.search_text,
            result_label: self.result_label(),
            facets,
            entries: self
                .visible()
                .into_iter()
                .map(|entry| self.entry_view(entry))
                .collect(),
        }
    }
}
