//! Facets: the repository, subdiscipline and journal filter dimensions.

use crate::catalog::Catalog;
use crate::entry::CatalogEntry;
use crate::selection::{ALL, FilterEvent, FilterMode, SelectionState};
use crate::utils::sorted_distinct;

/// A filter dimension with its own button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Repository,
    Subdiscipline,
    Journal,
}

impl FacetKind {
    /// Every facet, in the order the button groups are shown.
    pub const KINDS: [FacetKind; 3] = [
        FacetKind::Repository,
        FacetKind::Subdiscipline,
        FacetKind::Journal,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            FacetKind::Repository => "Filter by repositories",
            FacetKind::Subdiscipline => "Filter by subdisciplines",
            FacetKind::Journal => "Filter by journals",
        }
    }

    /// The mode selected by clicking a (non-`"All"`) button of this facet.
    pub fn mode(self) -> FilterMode {
        match self {
            FacetKind::Repository => FilterMode::Repo,
            FacetKind::Subdiscipline => FilterMode::Subdiscipline,
            FacetKind::Journal => FilterMode::Journal,
        }
    }

    /// The event emitted by clicking the button for `name`.
    pub fn event(self, name: &str) -> FilterEvent {
        let name = name.to_string();
        match self {
            FacetKind::Repository => FilterEvent::RepoSelected(name),
            FacetKind::Subdiscipline => FilterEvent::SubdisciplineSelected(name),
            FacetKind::Journal => FilterEvent::JournalSelected(name),
        }
    }

    /// The value this facet currently filters on.
    pub fn selected(self, state: &SelectionState) -> &str {
        match self {
            FacetKind::Repository => &state.repo_filter,
            FacetKind::Subdiscipline => &state.subd_filter,
            FacetKind::Journal => &state.journal_filter,
        }
    }

    /// Whether `entry` has `value` for this facet.
    pub fn matches(self, entry: &CatalogEntry, value: &str) -> bool {
        match self {
            FacetKind::Repository => entry.has_repository(value),
            FacetKind::Subdiscipline => entry.in_subdiscipline(value),
            FacetKind::Journal => entry.journal == value,
        }
    }

    /// Number of entries of `catalog` with `value`; `"All"` counts every entry.
    pub fn count(self, catalog: &Catalog, value: &str) -> usize {
        if value == ALL {
            return catalog.len();
        }
        catalog.iter().filter(|entry| self.matches(entry, value)).count()
    }
}

/// Distinct facet values of a catalog, each list sorted case-insensitively
/// and starting with `"All"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedLists<'a> {
    pub repositories: Vec<&'a str>,
    pub subdisciplines: Vec<&'a str>,
    pub journals: Vec<&'a str>,
}

impl<'a> DerivedLists<'a> {
    pub fn from_catalog(catalog: &'a Catalog) -> Self {
        let repositories = catalog
            .iter()
            .flat_map(|entry| entry.dataset_links.iter().map(|link| link.name.as_str()));
        let subdisciplines = catalog
            .iter()
            .flat_map(|entry| entry.subdiscipline.iter().map(|s| s.as_str()));
        let journals = catalog.iter().map(|entry| entry.journal.as_str());

        Self {
            repositories: with_all(repositories),
            subdisciplines: with_all(subdisciplines),
            journals: with_all(journals),
        }
    }

    pub fn get(&self, kind: FacetKind) -> &[&'a str] {
        match kind {
            FacetKind::Repository => &self.repositories,
            FacetKind::Subdiscipline => &self.subdisciplines,
            FacetKind::Journal => &self.journals,
        }
    }
}

fn with_all<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut list = vec![ALL];
    list.extend(sorted_distinct(values).into_iter().filter(|&value| value != ALL));
    list
}
