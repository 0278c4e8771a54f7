//! Two-valued view mode used as a secondary list filter.

use crate::model::paper::Paper;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Wire value for [`ViewMode::All`].
pub const VIEW_MODE_ALL: &str = "all";
/// Wire value for [`ViewMode::WithSummaries`].
pub const VIEW_MODE_WITH_SUMMARIES: &str = "with-summaries";

/// Library tab selector. Either value is reachable from the other at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Every paper passes.
    #[default]
    All,
    /// Only papers with `has_summary == true` pass.
    WithSummaries,
}

impl ViewMode {
    /// Stable string id used by CLI flags and config.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => VIEW_MODE_ALL,
            Self::WithSummaries => VIEW_MODE_WITH_SUMMARIES,
        }
    }

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Papers",
            Self::WithSummaries => "With Summaries",
        }
    }

    /// Returns whether `paper` passes this mode.
    pub fn admits(self, paper: &Paper) -> bool {
        match self {
            Self::All => true,
            Self::WithSummaries => paper.has_summary,
        }
    }

    /// Restricts `papers` to this mode, preserving order.
    pub fn restrict<'a, I>(self, papers: I) -> Vec<&'a Paper>
    where
        I: IntoIterator<Item = &'a Paper>,
    {
        papers
            .into_iter()
            .filter(|paper| self.admits(paper))
            .collect()
    }
}

/// Free-function form of [`ViewMode::restrict`].
pub fn restrict<'a, I>(papers: I, mode: ViewMode) -> Vec<&'a Paper>
where
    I: IntoIterator<Item = &'a Paper>,
{
    mode.restrict(papers)
}

/// Parses a view mode from its wire value.
pub fn parse_view_mode(value: &str) -> Result<ViewMode, ViewModeError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(ViewModeError::Empty);
    }

    match normalized {
        VIEW_MODE_ALL => Ok(ViewMode::All),
        VIEW_MODE_WITH_SUMMARIES => Ok(ViewMode::WithSummaries),
        other => Err(ViewModeError::Unsupported(other.to_string())),
    }
}

/// View mode parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModeError {
    Empty,
    Unsupported(String),
}

impl Display for ViewModeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "view mode must not be empty"),
            Self::Unsupported(value) => write!(
                f,
                "unsupported view mode `{value}`; expected {VIEW_MODE_ALL}|{VIEW_MODE_WITH_SUMMARIES}"
            ),
        }
    }
}

impl Error for ViewModeError {}
