//! Paper data sources.
//!
//! # Responsibility
//! - Define the data-source boundary that supplies paper records.
//! - Validate every record at this boundary, never inside search.
//!
//! # Invariants
//! - Sources return papers in their natural display order.
//! - A successfully loaded batch has unique ids and valid records.

pub mod fixtures;
pub mod json;

use crate::model::paper::{Paper, PaperValidationError};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub use fixtures::FixtureSource;
pub use json::JsonFileSource;

pub type SourceResult<T> = Result<T, SourceError>;

/// Data-source error for reading, decoding and validating papers.
#[derive(Debug)]
pub enum SourceError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        message: String,
    },
    /// Record at `index` failed boundary validation.
    Invalid {
        index: usize,
        error: PaperValidationError,
    },
    DuplicateId(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse { path, message } => {
                write!(f, "invalid paper data in `{}`: {message}", path.display())
            }
            Self::Invalid { index, error } => write!(f, "invalid paper at index {index}: {error}"),
            Self::DuplicateId(id) => write!(f, "duplicate paper id `{id}`"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Invalid { error, .. } => Some(error),
            Self::Parse { .. } | Self::DuplicateId(_) => None,
        }
    }
}

/// Supplier of paper records for one view session.
pub trait PaperSource {
    /// Loads and validates the full paper set.
    fn load_papers(&self) -> SourceResult<Vec<Paper>>;
    /// Short description for diagnostics (never contains paper content).
    fn describe(&self) -> String;
}

impl<S: PaperSource + ?Sized> PaperSource for &S {
    fn load_papers(&self) -> SourceResult<Vec<Paper>> {
        (**self).load_papers()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Validates each record and rejects duplicate ids.
pub fn validate_batch(papers: &[Paper]) -> SourceResult<()> {
    let mut seen = HashSet::with_capacity(papers.len());
    for (index, paper) in papers.iter().enumerate() {
        paper
            .validate()
            .map_err(|error| SourceError::Invalid { index, error })?;
        if !seen.insert(paper.id.as_str()) {
            return Err(SourceError::DuplicateId(paper.id.clone()));
        }
    }
    Ok(())
}
