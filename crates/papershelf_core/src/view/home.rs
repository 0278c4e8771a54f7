//! Search home view: query box, filter panel, result grid and viewer dialog.
//!
//! # Responsibility
//! - Own home view state as one explicit value with direct transitions.
//! - Project search results into paper cards.
//!
//! # Invariants
//! - `open_paper` always selects the paper and opens the viewer.
//! - `close_viewer` closes the dialog but keeps the selection.
//! - Favorites are session-local and keyed by paper id.

use crate::model::paper::{Paper, PaperId};
use crate::search::facets::SearchFilters;
use crate::search::PaperQuery;
use crate::view::actions::PaperAction;
use std::collections::BTreeSet;

/// Authors listed on a card before collapsing into `+ N more`.
pub const CARD_AUTHOR_LIMIT: usize = 3;
/// Subject label used when a paper carries none.
pub const DEFAULT_SUBJECT_LABEL: &str = "Computer Science";
/// Message shown when the result grid is empty.
pub const NO_RESULTS_MESSAGE: &str = "No papers found matching your search criteria.";

/// Home view state owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    pub query: String,
    pub show_filters: bool,
    pub dark_mode: bool,
    /// Filters applied from the panel; empty until the user applies some.
    pub filters: SearchFilters,
    pub selected: Option<PaperId>,
    pub viewer_open: bool,
    pub favorites: BTreeSet<PaperId>,
}

impl HomeState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn toggle_filters(&mut self) {
        self.show_filters = !self.show_filters;
    }

    pub fn close_filters(&mut self) {
        self.show_filters = false;
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn apply_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    /// Selects `paper_id` and opens the viewer dialog.
    pub fn open_paper(&mut self, paper_id: impl Into<PaperId>) {
        self.selected = Some(paper_id.into());
        self.viewer_open = true;
    }

    pub fn close_viewer(&mut self) {
        self.viewer_open = false;
    }

    /// Flips favorite state and returns the new value.
    pub fn toggle_favorite(&mut self, paper_id: &str) -> bool {
        if self.favorites.remove(paper_id) {
            false
        } else {
            self.favorites.insert(paper_id.to_string());
            true
        }
    }

    pub fn is_favorite(&self, paper_id: &str) -> bool {
        self.favorites.contains(paper_id)
    }

    /// Selected paper, resolved against `papers`.
    pub fn selected_paper<'a>(&self, papers: &'a [Paper]) -> Option<&'a Paper> {
        let selected = self.selected.as_deref()?;
        papers.iter().find(|paper| paper.id == selected)
    }

    /// Search request equivalent to this state.
    pub fn search_query(&self) -> PaperQuery {
        PaperQuery::new(self.query.clone()).with_filters(self.filters.clone())
    }
}

/// Card projection used by the home result grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperCardView<'a> {
    pub paper: &'a Paper,
    pub title: &'a str,
    pub authors: String,
    pub subject: &'a str,
    pub date: &'a str,
    pub is_favorite: bool,
    pub view: PaperAction,
    pub toggle_favorite: PaperAction,
}

/// Rendered home result section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeResults<'a> {
    /// `Results (N)`.
    pub heading: String,
    pub cards: Vec<PaperCardView<'a>>,
    /// Set iff `cards` is empty.
    pub empty_message: Option<&'static str>,
}

/// Runs the home search and projects results into cards.
pub fn render_home<'a>(papers: &'a [Paper], state: &HomeState) -> HomeResults<'a> {
    let results = state.search_query().apply(papers);
    let cards = results
        .into_iter()
        .map(|paper| paper_card(paper, state.is_favorite(paper.id.as_str())))
        .collect::<Vec<_>>();

    log::debug!(
        "event=home_render module=view status=ok total={} shown={} filters_active={}",
        papers.len(),
        cards.len(),
        !state.filters.is_empty()
    );

    HomeResults {
        heading: format!("Results ({})", cards.len()),
        empty_message: cards.is_empty().then_some(NO_RESULTS_MESSAGE),
        cards,
    }
}

/// Builds one result card for `paper`.
pub fn paper_card(paper: &Paper, is_favorite: bool) -> PaperCardView<'_> {
    PaperCardView {
        paper,
        title: paper.title.as_str(),
        authors: paper.short_author_line(CARD_AUTHOR_LIMIT),
        subject: paper.subject.as_deref().unwrap_or(DEFAULT_SUBJECT_LABEL),
        date: paper.date.as_str(),
        is_favorite,
        view: PaperAction::View(paper.id.clone()),
        toggle_favorite: PaperAction::ToggleFavorite(paper.id.clone()),
    }
}
