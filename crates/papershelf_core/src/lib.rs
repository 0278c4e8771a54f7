//! Core domain logic for papershelf.
//! This crate is the single source of truth for paper search and view state.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod source;
pub mod view;

pub use config::{ConfigError, ShelfConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::paper::{Paper, PaperId, PaperValidationError};
pub use search::facets::{parse_subject, DateRange, FilterError, SearchFilters, SUBJECTS};
pub use search::filter::{filter_papers, matches_query};
pub use search::mode::{parse_view_mode, restrict, ViewMode, ViewModeError};
pub use search::PaperQuery;
pub use service::library_service::LibraryService;
pub use source::fixtures::{FixtureSet, FixtureSource};
pub use source::json::JsonFileSource;
pub use source::{PaperSource, SourceError, SourceResult};
pub use view::actions::{dispatch, NoopActions, PaperAction, PaperActions};
pub use view::home::{render_home, HomeResults, HomeState, PaperCardView};
pub use view::library::{
    render_library, CardActions, EmptyState, LibraryCard, LibraryListing, LibraryState,
};
pub use view::viewer::{render_viewer, ViewerPanel, ViewerState, ViewerTab};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
