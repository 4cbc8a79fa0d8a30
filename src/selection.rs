//! The selection state driving what the catalog shows.
//!
//! Each UI event fully determines the next state; nothing from the previous
//! state carries over. This keeps transitions a pure function of the event.
//!
//! # Example
//!
//! ```
//! use lbecat::{ALL, FilterEvent, FilterMode, SelectionState};
//!
//! let state = SelectionState::from(FilterEvent::JournalSelected("Nature".to_string()));
//! assert_eq!(state.mode, FilterMode::Journal);
//! assert_eq!(state.journal_filter, "Nature");
//!
//! let state = SelectionState::from(FilterEvent::RepoSelected(ALL.to_string()));
//! assert_eq!(state, SelectionState::reset_all());
//! ```

use serde::{Deserialize, Serialize};

use crate::query::QueryParams;

/// Filter value meaning "no restriction".
pub const ALL: &str = "All";

/// Which filter dimension is currently authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Nothing selected yet; no entry is visible
    #[default]
    None,
    /// Free-text search over whole entries
    Text,
    /// Entries with a dataset in the selected repository
    Repo,
    /// Entries in the selected subdiscipline
    Subdiscipline,
    /// Entries published in the selected journal
    Journal,
    /// The entry whose publication link contains the page's `doi` parameter
    Doi,
}

/// A UI interaction that changes the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// The search box now contains this text
    TextChanged(String),
    RepoSelected(String),
    SubdisciplineSelected(String),
    JournalSelected(String),
}

/// Current filter/search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub repo_filter: String,
    pub subd_filter: String,
    pub journal_filter: String,
    pub search_text: String,
    pub mode: FilterMode,
}

impl SelectionState {
    /// The "show everything" state.
    pub fn reset_all() -> Self {
        Self {
            repo_filter: ALL.to_string(),
            subd_filter: ALL.to_string(),
            journal_filter: ALL.to_string(),
            search_text: String::new(),
            mode: FilterMode::Subdiscipline,
        }
    }

    /// The state a freshly opened page starts in.
    ///
    /// A `text` parameter (even an empty one) starts a text search; otherwise
    /// a `doi` parameter selects DOI mode. The DOI itself is not copied into
    /// the state, it is read from the page parameters when filtering.
    /// Without either parameter everything is shown.
    pub fn initial(query: &QueryParams) -> Self {
        if let Some(text) = &query.text {
            Self {
                search_text: text.clone(),
                mode: FilterMode::Text,
                ..Self::default()
            }
        } else if query.doi.is_some() {
            Self {
                mode: FilterMode::Doi,
                ..Self::default()
            }
        } else {
            Self::reset_all()
        }
    }

    /// The state following `event`.
    pub fn apply(&self, event: FilterEvent) -> Self {
        Self::from(event)
    }

    /// Whether an `"All"` selection lifts every restriction.
    ///
    /// Only the repository and subdiscipline filters are consulted, and they
    /// take precedence over the mode.
    pub fn shows_everything(&self) -> bool {
        self.repo_filter == ALL || self.subd_filter == ALL
    }
}

impl From<FilterEvent> for SelectionState {
    fn from(event: FilterEvent) -> Self {
        match event {
            FilterEvent::TextChanged(text) => Self {
                search_text: text,
                mode: FilterMode::Text,
                ..Self::default()
            },
            FilterEvent::RepoSelected(name)
            | FilterEvent::SubdisciplineSelected(name)
            | FilterEvent::JournalSelected(name)
                if name == ALL =>
            {
                Self::reset_all()
            }
            FilterEvent::RepoSelected(name) => Self {
                repo_filter: name,
                mode: FilterMode::Repo,
                ..Self::default()
            },
            FilterEvent::SubdisciplineSelected(name) => Self {
                subd_filter: name,
                mode: FilterMode::Subdiscipline,
                ..Self::default()
            },
            FilterEvent::JournalSelected(name) => Self {
                journal_filter: name,
                mode: FilterMode::Journal,
                ..Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn state(repo: &str, subd: &str, journal: &str, search: &str, mode: FilterMode) -> SelectionState {
        SelectionState {
            repo_filter: repo.to_string(),
            subd_filter: subd.to_string(),
            journal_filter: journal.to_string(),
            search_text: search.to_string(),
            mode,
        }
    }

    #[test]
    fn test_initial_with_text() {
        let query = QueryParams::default().with_text("ice").with_doi("10.1000/x");
        assert_eq!(
            SelectionState::initial(&query),
            state("", "", "", "ice", FilterMode::Text)
        );
    }

    #[test]
    fn test_initial_with_empty_text() {
        let query = QueryParams::parse("?text=");
        assert_eq!(
            SelectionState::initial(&query),
            state("", "", "", "", FilterMode::Text)
        );
    }

    #[test]
    fn test_initial_with_doi() {
        let query = QueryParams::default().with_doi("10.1000/x");
        assert_eq!(
            SelectionState::initial(&query),
            state("", "", "", "", FilterMode::Doi)
        );
    }

    #[test]
    fn test_initial_without_parameters() {
        assert_eq!(
            SelectionState::initial(&QueryParams::default()),
            state(ALL, ALL, ALL, "", FilterMode::Subdiscipline)
        );
    }

    #[rstest]
    #[case(FilterEvent::TextChanged("ice".into()), state("", "", "", "ice", FilterMode::Text))]
    #[case(FilterEvent::TextChanged("".into()), state("", "", "", "", FilterMode::Text))]
    #[case(FilterEvent::RepoSelected("Zenodo".into()), state("Zenodo", "", "", "", FilterMode::Repo))]
    #[case(
        FilterEvent::SubdisciplineSelected("Seismology".into()),
        state("", "Seismology", "", "", FilterMode::Subdiscipline)
    )]
    #[case(FilterEvent::JournalSelected("Nature".into()), state("", "", "Nature", "", FilterMode::Journal))]
    #[case(FilterEvent::RepoSelected(ALL.into()), SelectionState::reset_all())]
    #[case(FilterEvent::SubdisciplineSelected(ALL.into()), SelectionState::reset_all())]
    #[case(FilterEvent::JournalSelected(ALL.into()), SelectionState::reset_all())]
    fn test_transitions(#[case] event: FilterEvent, #[case] expected: SelectionState) {
        assert_eq!(SelectionState::from(event), expected);
    }

    #[rstest]
    #[case(SelectionState::default())]
    #[case(state("Zenodo", "", "", "", FilterMode::Repo))]
    #[case(state("", "", "", "glacier", FilterMode::Text))]
    #[case(state("", "", "", "", FilterMode::Doi))]
    fn test_reset_all_from_any_state(#[case] previous: SelectionState) {
        let next = previous.apply(FilterEvent::JournalSelected(ALL.to_string()));
        assert_eq!(next, state(ALL, ALL, ALL, "", FilterMode::Subdiscipline));
    }

    #[test]
    fn test_transition_discards_previous_search() {
        let searching = state("", "", "", "glacier", FilterMode::Text);
        let next = searching.apply(FilterEvent::RepoSelected("Zenodo".to_string()));
        assert_eq!(next.search_text, "");
    }

    #[rstest]
    #[case(state(ALL, "", "", "", FilterMode::Repo), true)]
    #[case(state("", ALL, "", "", FilterMode::Journal), true)]
    #[case(state("", "", ALL, "", FilterMode::Journal), false)]
    #[case(state("Zenodo", "", "", "", FilterMode::Repo), false)]
    fn test_shows_everything(#[case] state: SelectionState, #[case] expected: bool) {
        assert_eq!(state.shows_everything(), expected);
    }
}
