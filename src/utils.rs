use crate::regex::Regex;
use itertools::Itertools;
use std::cmp::Ordering;
use std::hash::Hash;
use std::sync::LazyLock;

static DOI_LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"doi\.org/(.+)").unwrap());

/// Extracts the DOI from a publication link, i.e. everything after the first
/// `doi.org/`.
///
/// Returns `None` when the link has no `doi.org/` segment or nothing follows it.
pub fn extract_doi(link: &str) -> Option<&str> {
    DOI_LINK_REGEX
        .captures(link)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
        .filter(|doi| !doi.is_empty())
}

/// Orders two strings ignoring case, falling back to a byte-wise comparison
/// so that the order is total.
pub fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Removes exact duplicates and sorts the remaining values case-insensitively.
pub fn sorted_distinct<I, S>(values: I) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Clone + Eq + Hash,
{
    values
        .into_iter()
        .unique()
        .sorted_by(|a, b| compare_case_insensitive(a.as_ref(), b.as_ref()))
        .collect()
}

/// Splits a `", "`-separated author string into names.
pub fn split_authors(authors: &str) -> Vec<&str> {
    if authors.trim().is_empty() {
        return Vec::new();
    }
    authors.split(", ").collect()
}
