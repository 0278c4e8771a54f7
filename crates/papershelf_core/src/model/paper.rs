//! Paper domain model.
//!
//! # Responsibility
//! - Define the read-only publication record shared by every view.
//! - Validate records at the data-source boundary.
//! - Provide display projections (author lines, byline).
//!
//! # Invariants
//! - `id` is opaque and unique within one loaded paper set.
//! - `has_summary` is fixed by the data source and never recomputed.
//! - `tags` keep insertion order and contain no exact duplicates.
//! - `date` is carried as-is; no calendar validation is performed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque identifier for one paper.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PaperId = String;

/// Read-only publication record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Stable opaque ID used by view actions.
    pub id: PaperId,
    pub title: String,
    /// Ordered author names, rendered in source order.
    pub authors: Vec<String>,
    /// Publication date string, usually `YYYY-MM-DD`.
    pub date: String,
    /// Serialized as `abstract`, which is a reserved word in Rust.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether a generated summary exists for this paper.
    #[serde(default)]
    pub has_summary: bool,
    /// Link to the full-text PDF shown by the viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Subject area label, e.g. `Computer Science`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Validation errors for boundary checks on incoming paper records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaperValidationError {
    EmptyId,
    EmptyTitle,
    /// Author at `index` is blank.
    BlankAuthor { index: usize },
    /// Tag at `index` is blank.
    BlankTag { index: usize },
    /// The same tag appears more than once.
    DuplicateTag(String),
}

impl Display for PaperValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "paper id must not be empty"),
            Self::EmptyTitle => write!(f, "paper title must not be empty"),
            Self::BlankAuthor { index } => write!(f, "author at index {index} is blank"),
            Self::BlankTag { index } => write!(f, "tag at index {index} is blank"),
            Self::DuplicateTag(tag) => write!(f, "duplicate tag `{tag}`"),
        }
    }
}

impl Error for PaperValidationError {}

impl Paper {
    /// Creates a paper with a generated UUID v4 string id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title)
    }

    /// Creates a paper with a caller-provided id.
    ///
    /// Used by import paths where identity already exists externally.
    /// Does not validate; call [`Paper::validate`] at the boundary.
    pub fn with_id(id: impl Into<PaperId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            authors: Vec::new(),
            date: String::new(),
            abstract_text: String::new(),
            tags: Vec::new(),
            has_summary: false,
            url: None,
            subject: None,
        }
    }

    /// Validates boundary invariants for this record.
    ///
    /// # Errors
    /// - Blank `id` or `title`.
    /// - Blank author name or tag.
    /// - Duplicate tag (exact match).
    pub fn validate(&self) -> Result<(), PaperValidationError> {
        if self.id.trim().is_empty() {
            return Err(PaperValidationError::EmptyId);
        }
        if self.title.trim().is_empty() {
            return Err(PaperValidationError::EmptyTitle);
        }
        if let Some(index) = self.authors.iter().position(|a| a.trim().is_empty()) {
            return Err(PaperValidationError::BlankAuthor { index });
        }
        for (index, tag) in self.tags.iter().enumerate() {
            if tag.trim().is_empty() {
                return Err(PaperValidationError::BlankTag { index });
            }
            if self.tags[..index].contains(tag) {
                return Err(PaperValidationError::DuplicateTag(tag.clone()));
            }
        }
        Ok(())
    }

    /// All authors joined with `", "`.
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }

    /// First `max` authors, followed by ` + N more` when truncated.
    pub fn short_author_line(&self, max: usize) -> String {
        let shown = self
            .authors
            .iter()
            .take(max)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        let hidden = self.authors.len().saturating_sub(max);
        if hidden > 0 {
            format!("{shown} + {hidden} more")
        } else {
            shown
        }
    }

    /// Author line and date, as shown under card and dialog titles.
    pub fn byline(&self) -> String {
        format!("{} • {}", self.author_line(), self.date)
    }
}
