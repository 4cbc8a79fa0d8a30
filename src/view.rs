//! View models handed to the page renderer.

use either::Either;

use crate::authors::AuthorList;
use crate::config::CatalogConfig;
use crate::entry::{CatalogEntry, DatasetLink};
use crate::facets::FacetKind;
use crate::query::doi_permalink;
use crate::selection::{FilterEvent, SelectionState};

/// A filter button, either in a facet group (numbered) or as a repository
/// badge on an entry card (not numbered).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton<'a> {
    pub kind: FacetKind,
    pub name: &'a str,
    /// Matching entries, shown in the label when present
    pub count: Option<usize>,
    /// Whether this value is the one currently selected for its facet
    pub active: bool,
}

impl<'a> FilterButton<'a> {
    pub fn new(kind: FacetKind, name: &'a str, state: &SelectionState) -> Self {
        Self {
            kind,
            name,
            count: None,
            active: kind.selected(state) == name,
        }
    }

    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// `"Zenodo (2)"` for numbered buttons, `"Zenodo"` otherwise.
    pub fn label(&self) -> String {
        match self.count {
            Some(count) => format!("{} ({})", self.name, count),
            None => self.name.to_string(),
        }
    }

    /// The event to dispatch when the button is clicked.
    pub fn event(&self) -> FilterEvent {
        self.kind.event(self.name)
    }
}

/// The buttons of one facet with their heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetGroup<'a> {
    pub kind: FacetKind,
    pub heading: &'static str,
    pub buttons: Vec<FilterButton<'a>>,
}

/// Everything needed to render one entry card.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryView<'a> {
    pub entry: &'a CatalogEntry,
    /// Collapsible author list; toggling it only affects this card
    pub authors: AuthorList<'a>,
    /// The DOI, or the raw publication link when it carries no DOI
    pub doi: Either<&'a str, &'a str>,
    /// Link reopening the catalog on this entry alone; absent without a DOI
    pub permalink: Option<String>,
    /// One un-numbered badge per distinct repository
    pub repositories: Vec<FilterButton<'a>>,
}

impl<'a> EntryView<'a> {
    pub fn new(entry: &'a CatalogEntry, state: &SelectionState, config: &CatalogConfig) -> Self {
        let doi = match entry.doi() {
            Ok(doi) => Either::Left(doi),
            Err(_) => Either::Right(entry.publication_link.as_str()),
        };
        let permalink = doi
            .left()
            .map(|doi| doi_permalink(config.permalink_base(), doi));
        let repositories = entry
            .repository_names()
            .into_iter()
            .map(|name| FilterButton::new(FacetKind::Repository, name, state))
            .collect();

        Self {
            entry,
            authors: AuthorList::new(&entry.authors, config.author_list_length()),
            doi,
            permalink,
            repositories,
        }
    }

    /// The text shown as the DOI link; the link target is always the
    /// publication link.
    pub fn doi_text(&self) -> &'a str {
        either::for_both!(self.doi, text => text)
    }

    pub fn dataset_links(&self) -> &'a [DatasetLink] {
        &self.entry.dataset_links
    }
}

/// The whole catalog page for the current selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage<'a> {
    pub search_text: &'a str,
    /// Result count, shown only while searching text
    pub result_label: Option<String>,
    pub facets: Vec<FacetGroup<'a>>,
    pub entries: Vec<EntryView<'a>>,
}
