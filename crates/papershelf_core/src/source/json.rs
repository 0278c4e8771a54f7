//! JSON file paper source.
//!
//! Expects a top-level array of camelCase paper objects.

use super::{validate_batch, PaperSource, SourceError, SourceResult};
use crate::model::paper::Paper;
use std::path::{Path, PathBuf};

/// Reads papers from a JSON file on every load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl PaperSource for JsonFileSource {
    fn load_papers(&self) -> SourceResult<Vec<Paper>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let papers = parse_papers_json(&raw).map_err(|err| SourceError::Parse {
            path: self.path.clone(),
            message: err.to_string(),
        })?;
        validate_batch(&papers)?;
        Ok(papers)
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

/// Decodes a JSON array of papers without validating them.
pub fn parse_papers_json(raw: &str) -> Result<Vec<Paper>, serde_json::Error> {
    serde_json::from_str(raw)
}
