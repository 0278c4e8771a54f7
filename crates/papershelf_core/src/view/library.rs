//! Saved-paper library view.
//!
//! # Responsibility
//! - Own library view state (query + active tab) as an explicit value.
//! - Project a paper list into cards with their action capabilities.
//! - Choose the empty-state message when nothing is listed.
//!
//! # Invariants
//! - Card order equals source order.
//! - `export_summary` is present iff the mode is `WithSummaries` or the paper
//!   has a summary; it is decided once per render.

use crate::model::paper::Paper;
use crate::search::filter::filter_papers;
use crate::search::mode::ViewMode;
use crate::view::actions::PaperAction;

/// Library view state owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryState {
    pub query: String,
    pub mode: ViewMode,
}

impl LibraryState {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }
}

/// Actions available on one library card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardActions {
    pub view: PaperAction,
    pub remove: PaperAction,
    pub export_summary: Option<PaperAction>,
}

impl CardActions {
    /// All available actions, in button order.
    pub fn available(&self) -> Vec<&PaperAction> {
        let mut actions = vec![&self.view];
        actions.extend(self.export_summary.as_ref());
        actions.push(&self.remove);
        actions
    }
}

/// One rendered library card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryCard<'a> {
    pub paper: &'a Paper,
    /// Shows the "Summary Available" badge.
    pub summary_badge: bool,
    pub actions: CardActions,
}

/// Message shown when the listing has no cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Rendered library listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryListing<'a> {
    pub mode: ViewMode,
    pub cards: Vec<LibraryCard<'a>>,
    /// Set iff `cards` is empty.
    pub empty_state: Option<EmptyState>,
}

/// Label on cards whose paper has a summary.
pub const SUMMARY_BADGE_LABEL: &str = "Summary Available";

/// Filters `papers` by `state` and projects the result into cards.
pub fn render_library<'a>(papers: &'a [Paper], state: &LibraryState) -> LibraryListing<'a> {
    let matched = filter_papers(papers, state.query.as_str());
    let visible = state.mode.restrict(matched);
    let cards = visible
        .into_iter()
        .map(|paper| library_card(paper, state.mode))
        .collect::<Vec<_>>();
    let empty_state = cards
        .is_empty()
        .then(|| empty_state_for(state.mode, state.query.as_str()));

    log::debug!(
        "event=library_render module=view status=ok mode={} total={} shown={}",
        state.mode.as_str(),
        papers.len(),
        cards.len()
    );

    LibraryListing {
        mode: state.mode,
        cards,
        empty_state,
    }
}

/// Empty-state message for `mode`, given the current query.
pub fn empty_state_for(mode: ViewMode, query: &str) -> EmptyState {
    match mode {
        ViewMode::All => EmptyState {
            title: "No saved papers found",
            hint: if query.is_empty() {
                "Save papers to your library to view them here"
            } else {
                "Try a different search term"
            },
        },
        ViewMode::WithSummaries => EmptyState {
            title: "No papers with summaries",
            hint: "Generate summaries for your saved papers to see them here",
        },
    }
}

fn library_card(paper: &Paper, mode: ViewMode) -> LibraryCard<'_> {
    let can_export = mode == ViewMode::WithSummaries || paper.has_summary;
    LibraryCard {
        paper,
        summary_badge: paper.has_summary,
        actions: CardActions {
            view: PaperAction::View(paper.id.clone()),
            remove: PaperAction::Remove(paper.id.clone()),
            export_summary: can_export.then(|| PaperAction::ExportSummary(paper.id.clone())),
        },
    }
}
