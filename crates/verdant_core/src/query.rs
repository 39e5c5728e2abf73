//! Search term selection.

use crate::nature_queries;
use rand::Rng;
use serde::{Deserialize, Serialize};
use verdant_error::ConfigError;

/// A search term sent to the photo provider.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[display("{}", _0)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    /// Borrow the term.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SearchQuery {
    fn from(term: &str) -> Self {
        Self(term.to_string())
    }
}

/// How search terms are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum QueryStrategy {
    /// Always use one configured term
    #[display("fixed")]
    Fixed,
    /// Pick uniformly from a list of terms
    #[default]
    #[display("random")]
    Random,
}

/// Picks the search term for each attempt.
///
/// A random selector always holds at least one term, so [`select`](Self::select)
/// cannot fail.
///
/// # Examples
///
/// ```
/// use verdant_core::{QuerySelector, SearchQuery};
///
/// let fixed = QuerySelector::fixed("nature").unwrap();
/// assert_eq!(fixed.select(), SearchQuery::from("nature"));
///
/// let random = QuerySelector::nature();
/// assert!(random.candidates().contains(&random.select()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySelector {
    /// Always returns the same term
    Fixed(SearchQuery),
    /// Uniform choice from a non-empty list
    Random(Vec<SearchQuery>),
}

impl QuerySelector {
    /// Selector that always yields `term`.
    ///
    /// # Errors
    ///
    /// Returns an error if the term is blank.
    #[track_caller]
    pub fn fixed(term: impl Into<String>) -> Result<Self, ConfigError> {
        let term = term.into();
        if term.trim().is_empty() {
            return Err(ConfigError::new("Fixed search term must not be empty"));
        }
        Ok(Self::Fixed(SearchQuery(term)))
    }

    /// Selector that picks uniformly from `terms`.
    ///
    /// Blank entries are dropped; repeated entries are collapsed so they do not
    /// skew the distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if no usable term remains.
    #[track_caller]
    pub fn random<I, S>(terms: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut candidates: Vec<SearchQuery> = Vec::new();
        for term in terms {
            let term = term.into();
            if term.trim().is_empty() {
                continue;
            }
            let query = SearchQuery(term);
            if !candidates.contains(&query) {
                candidates.push(query);
            }
        }

        if candidates.is_empty() {
            return Err(ConfigError::new(
                "Random query strategy requires at least one search term",
            ));
        }
        Ok(Self::Random(candidates))
    }

    /// Random selector over the curated nature terms.
    pub fn nature() -> Self {
        Self::Random(nature_queries().map(SearchQuery::from).collect())
    }

    /// Strategy this selector implements.
    pub fn strategy(&self) -> QueryStrategy {
        match self {
            Self::Fixed(_) => QueryStrategy::Fixed,
            Self::Random(_) => QueryStrategy::Random,
        }
    }

    /// Every term this selector can return.
    pub fn candidates(&self) -> &[SearchQuery] {
        match self {
            Self::Fixed(term) => std::slice::from_ref(term),
            Self::Random(terms) => terms,
        }
    }

    /// Choose the term for the next attempt.
    pub fn select(&self) -> SearchQuery {
        match self {
            Self::Fixed(term) => term.clone(),
            Self::Random(terms) => {
                let index = rand::thread_rng().gen_range(0..terms.len());
                terms[index].clone()
            }
        }
    }
}

impl Default for QuerySelector {
    fn default() -> Self {
        Self::nature()
    }
}
