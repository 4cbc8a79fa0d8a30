//! Collapsible author lists.
//!
//! Long author lists are cut after a fixed number of names and followed by a
//! control that expands the full list. The expanded/collapsed flag belongs to
//! a single rendered entry and is independent of the catalog selection.
//!
//! # Example
//!
//! ```
//! use lbecat::{AuthorList, AuthorToggle};
//!
//! let mut authors = AuthorList::new("A, B, C, D", 2);
//! assert_eq!(authors.text(), "A, B, ...");
//! assert_eq!(authors.control(), Some(AuthorToggle::ShowAll));
//!
//! authors.toggle();
//! assert_eq!(authors.text(), "A, B, C, D");
//! assert_eq!(authors.control(), Some(AuthorToggle::Collapse));
//! ```

use std::borrow::Cow;

use crate::utils::split_authors;

/// The control shown after a truncatable author list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorToggle {
    /// List is collapsed, clicking shows every author
    ShowAll,
    /// List is expanded, clicking collapses it again
    Collapse,
}

impl AuthorToggle {
    pub fn label(self) -> &'static str {
        match self {
            AuthorToggle::ShowAll => "show all \u{25BC}",
            AuthorToggle::Collapse => "\u{25B2} collapse",
        }
    }
}

/// Author list of one entry with its expand/collapse state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorList<'a> {
    authors: &'a str,
    names: Vec<&'a str>,
    length: usize,
    expanded: bool,
}

impl<'a> AuthorList<'a> {
    /// Creates a collapsed list showing at most `length` names.
    pub fn new(authors: &'a str, length: usize) -> Self {
        Self {
            authors,
            names: split_authors(authors),
            length,
            expanded: false,
        }
    }

    /// Number of authors in the full list.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether the list is longer than the threshold and gets a control.
    pub fn is_truncatable(&self) -> bool {
        self.names.len() > self.length
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flips between the collapsed and the full list. No-op for short lists.
    pub fn toggle(&mut self) {
        if self.is_truncatable() {
            self.expanded = !self.expanded;
        }
    }

    /// The names currently displayed.
    pub fn shown(&self) -> &[&'a str] {
        if self.is_truncatable() && !self.expanded {
            &self.names[..self.length]
        } else {
            &self.names
        }
    }

    /// The display text: the full author string, or the first names joined
    /// with `", "` and followed by `", ..."` when collapsed.
    pub fn text(&self) -> Cow<'a, str> {
        if self.is_truncatable() && !self.expanded {
            Cow::Owned(format!("{}, ...", self.shown().join(", ")))
        } else {
            Cow::Borrowed(self.authors)
        }
    }

    /// The control to render after the text, if any.
    pub fn control(&self) -> Option<AuthorToggle> {
        match (self.is_truncatable(), self.expanded) {
            (false, _) => None,
            (true, false) => Some(AuthorToggle::ShowAll),
            (true, true) => Some(AuthorToggle::Collapse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn names(count: usize) -> String {
        (1..=count)
            .map(|i| format!("Author {i}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[test]
    fn test_short_list_has_no_control() {
        let mut authors = AuthorList::new("A, B, C", 10);
        assert_eq!(authors.text(), "A, B, C");
        assert_eq!(authors.control(), None);

        authors.toggle();
        assert!(!authors.is_expanded());
        assert_eq!(authors.text(), "A, B, C");
    }

    #[test]
    fn test_fifteen_authors_truncated_to_ten() {
        let full = names(15);
        let mut authors = AuthorList::new(&full, 10);
        assert_eq!(authors.len(), 15);

        assert_eq!(authors.shown().len(), 10);
        assert_eq!(authors.text(), format!("{}, ...", names(10)));
        assert_eq!(authors.control(), Some(AuthorToggle::ShowAll));
        assert_eq!(authors.control().unwrap().label(), "show all ▼");

        authors.toggle();
        assert_eq!(authors.shown().len(), 15);
        assert_eq!(authors.text(), full);
        assert_eq!(authors.control(), Some(AuthorToggle::Collapse));
        assert_eq!(authors.control().unwrap().label(), "▲ collapse");

        authors.toggle();
        assert_eq!(authors.shown().len(), 10);
        assert_eq!(authors.control(), Some(AuthorToggle::ShowAll));
    }

    #[rstest]
    #[case(9, false)]
    #[case(10, false)]
    #[case(11, true)]
    fn test_threshold_is_inclusive(#[case] count: usize, #[case] truncatable: bool) {
        let full = names(count);
        assert_eq!(AuthorList::new(&full, 10).is_truncatable(), truncatable);
    }

    #[test]
    fn test_empty_authors() {
        let authors = AuthorList::new("", 10);
        assert!(authors.is_empty());
        assert_eq!(authors.text(), "");
        assert_eq!(authors.control(), None);
    }
}
