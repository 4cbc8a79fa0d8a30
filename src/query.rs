//! URL query parameters read when the catalog page is opened.
//!
//! Two parameters are recognised: `text` seeds the free-text search and
//! `doi` restricts the page to one publication (see permalinks).

use url::{Url, form_urlencoded};

use crate::Result;

/// The `text` and `doi` parameters of the page URL.
///
/// A parameter that is present but empty is `Some("")`, which differs from
/// an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pub text: Option<String>,
    pub doi: Option<String>,
}

impl QueryParams {
    /// Parses a query string such as `?text=glacier` or `doi=10.1000%2Fx`.
    ///
    /// The leading `?` is optional. When a parameter occurs several times the
    /// first occurrence wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use lbecat::QueryParams;
    ///
    /// let query = QueryParams::parse("?text=sea+ice&doi=10.1000%2Fx");
    /// assert_eq!(query.text.as_deref(), Some("sea ice"));
    /// assert_eq!(query.doi.as_deref(), Some("10.1000/x"));
    /// ```
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "text" if params.text.is_none() => params.text = Some(value.into_owned()),
                "doi" if params.doi.is_none() => params.doi = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }

    /// Reads the parameters of a full page URL.
    pub fn from_url(url: &Url) -> Self {
        Self::parse(url.query().unwrap_or_default())
    }

    /// Parses a full page URL and reads its parameters.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if `url` is not an absolute URL.
    pub fn from_url_str(url: &str) -> Result<Self> {
        Ok(Self::from_url(&Url::parse(url)?))
    }

    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    #[must_use]
    pub fn with_doi(mut self, doi: &str) -> Self {
        self.doi = Some(doi.to_string());
        self
    }
}

/// Builds the relative link that reopens the catalog showing only the
/// publication with `doi`.
pub fn doi_permalink(base: &str, doi: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(doi.as_bytes()).collect();
    format!("{base}?doi={encoded}")
}
