//! Client-side paper search.
//!
//! # Responsibility
//! - Narrow an in-memory paper list by query text, view mode and filters.
//! - Keep every stage a pure, order-preserving predicate.
//!
//! # Invariants
//! - Stages are independent, so composition order does not change results.

pub mod facets;
pub mod filter;
pub mod mode;

use crate::model::paper::Paper;
use facets::SearchFilters;
use mode::ViewMode;

/// Full search request: text query, view mode and advanced filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperQuery {
    pub text: String,
    pub mode: ViewMode,
    pub filters: SearchFilters,
}

impl PaperQuery {
    /// Creates a text-only query in [`ViewMode::All`].
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the view mode.
    pub fn with_mode(mut self, mode: ViewMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the advanced filters.
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Applies text filter, then mode, then advanced filters.
    pub fn apply<'a, I>(&self, papers: I) -> Vec<&'a Paper>
    where
        I: IntoIterator<Item = &'a Paper>,
    {
        let matched = filter::filter_papers(papers, self.text.as_str());
        let restricted = self.mode.restrict(matched);
        if self.filters.is_empty() {
            return restricted;
        }
        self.filters.apply(restricted)
    }
}
