//! Library use-case service.
//!
//! # Responsibility
//! - Load one validated paper set from a data source per session.
//! - Expose read-only lookup, search and listing entry points.
//!
//! # Invariants
//! - Papers are loaded once and never mutated by the service.
//! - Service layer remains source-agnostic.

use crate::model::paper::Paper;
use crate::search::PaperQuery;
use crate::source::{PaperSource, SourceResult};
use crate::view::library::{render_library, LibraryListing, LibraryState};

/// Read-only facade over a loaded paper set.
pub struct LibraryService<S: PaperSource> {
    source: S,
    papers: Vec<Paper>,
}

impl<S: PaperSource> LibraryService<S> {
    /// Loads and validates papers from `source`.
    ///
    /// # Errors
    /// Returns the source error unchanged when loading or validation fails.
    pub fn load(source: S) -> SourceResult<Self> {
        let origin = source.describe();
        let papers = match source.load_papers() {
            Ok(papers) => papers,
            Err(err) => {
                log::error!(
                    "event=library_load module=service status=error source={} error={}",
                    origin,
                    err
                );
                return Err(err);
            }
        };
        log::info!(
            "event=library_load module=service status=ok source={} count={} with_summary={}",
            origin,
            papers.len(),
            papers.iter().filter(|paper| paper.has_summary).count()
        );
        Ok(Self { source, papers })
    }

    /// Underlying data source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// All loaded papers in source order.
    pub fn papers(&self) -> &[Paper] {
        self.papers.as_slice()
    }

    /// Gets one paper by id.
    pub fn get_paper(&self, paper_id: &str) -> Option<&Paper> {
        self.papers.iter().find(|paper| paper.id == paper_id)
    }

    /// Runs a full search over the loaded papers.
    pub fn search(&self, query: &PaperQuery) -> Vec<&Paper> {
        let hits = query.apply(&self.papers);
        log::debug!(
            "event=library_search module=service status=ok mode={} total={} matched={}",
            query.mode.as_str(),
            self.papers.len(),
            hits.len()
        );
        hits
    }

    /// Renders the library listing for `state`.
    pub fn listing(&self, state: &LibraryState) -> LibraryListing<'_> {
        render_library(&self.papers, state)
    }
}
