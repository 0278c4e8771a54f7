//! Advanced search filters: publication date range, author and subject area.
//!
//! # Responsibility
//! - Validate filter input once, when the filter panel is applied.
//! - Apply the validated filters as a stable, pure list predicate.
//!
//! # Invariants
//! - An empty `SearchFilters` matches every paper.
//! - Date comparison is lexicographic over `YYYY-MM-DD`; no calendar checks.
//! - Papers whose date lacks the `YYYY-MM-DD` prefix never match an active range.

use crate::model::paper::Paper;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid iso date regex"));

const ISO_DATE_LEN: usize = 10;

/// Known subject areas offered by the filter panel.
pub const SUBJECTS: &[&str] = &[
    "Computer Science",
    "Mathematics",
    "Physics",
    "Biology",
    "Chemistry",
    "Medicine",
    "Economics",
    "Psychology",
    "Engineering",
    "Social Sciences",
];

/// Filter input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Date bound is not shaped `YYYY-MM-DD`.
    InvalidDate(String),
    /// `from` is later than `to`.
    ReversedRange { from: String, to: String },
    UnknownSubject(String),
}

impl Display for FilterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::ReversedRange { from, to } => {
                write!(f, "date range start `{from}` is after end `{to}`")
            }
            Self::UnknownSubject(value) => write!(f, "unknown subject area `{value}`"),
        }
    }
}

impl Error for FilterError {}

/// Inclusive publication date range. Either bound may be open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    from: Option<String>,
    to: Option<String>,
}

impl DateRange {
    /// Builds a validated range from optional `YYYY-MM-DD` bounds.
    ///
    /// # Errors
    /// - `InvalidDate` when a bound is not shaped `YYYY-MM-DD`.
    /// - `ReversedRange` when `from > to`.
    pub fn new(from: Option<&str>, to: Option<&str>) -> Result<Self, FilterError> {
        let from = from.map(parse_iso_date).transpose()?;
        let to = to.map(parse_iso_date).transpose()?;
        if let (Some(start), Some(end)) = (&from, &to) {
            if start > end {
                return Err(FilterError::ReversedRange {
                    from: start.clone(),
                    to: end.clone(),
                });
            }
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    /// Returns whether `date` falls inside this range.
    pub fn contains(&self, date: &str) -> bool {
        let Some(day) = date_prefix(date) else {
            return false;
        };
        if let Some(start) = self.from.as_deref() {
            if day < start {
                return false;
            }
        }
        if let Some(end) = self.to.as_deref() {
            if day > end {
                return false;
            }
        }
        true
    }
}

/// Applied state of the advanced filter panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub date_range: Option<DateRange>,
    /// Case-insensitive author substring; blank means no constraint.
    pub author: String,
    /// Canonical subject from [`SUBJECTS`].
    pub subject: Option<String>,
}

impl SearchFilters {
    /// Returns whether no filter dimension is active.
    pub fn is_empty(&self) -> bool {
        self.date_range.is_none() && self.author.trim().is_empty() && self.subject.is_none()
    }

    /// Clears every filter dimension.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Sets the subject filter from user input.
    pub fn set_subject(&mut self, value: &str) -> Result<(), FilterError> {
        self.subject = Some(parse_subject(value)?.to_string());
        Ok(())
    }

    /// Returns whether `paper` passes every active dimension.
    pub fn matches(&self, paper: &Paper) -> bool {
        if let Some(range) = &self.date_range {
            if !range.contains(paper.date.as_str()) {
                return false;
            }
        }

        let author = self.author.trim().to_lowercase();
        if !author.is_empty()
            && !paper
                .authors
                .iter()
                .any(|name| name.to_lowercase().contains(author.as_str()))
        {
            return false;
        }

        if let Some(subject) = self.subject.as_deref() {
            let in_subject = paper
                .subject
                .as_deref()
                .is_some_and(|value| value.eq_ignore_ascii_case(subject));
            let in_tags = paper
                .tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(subject));
            if !in_subject && !in_tags {
                return false;
            }
        }

        true
    }

    /// Stable filter over `papers`.
    pub fn apply<'a, I>(&self, papers: I) -> Vec<&'a Paper>
    where
        I: IntoIterator<Item = &'a Paper>,
    {
        papers
            .into_iter()
            .filter(|paper| self.matches(paper))
            .collect()
    }
}

/// Resolves user input to a canonical subject from [`SUBJECTS`].
pub fn parse_subject(value: &str) -> Result<&'static str, FilterError> {
    let trimmed = value.trim();
    SUBJECTS
        .iter()
        .copied()
        .find(|subject| subject.eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| FilterError::UnknownSubject(trimmed.to_string()))
}

fn parse_iso_date(value: &str) -> Result<String, FilterError> {
    let trimmed = value.trim();
    if ISO_DATE_RE.is_match(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(FilterError::InvalidDate(trimmed.to_string()))
    }
}

fn date_prefix(date: &str) -> Option<&str> {
    let prefix = date.trim().get(..ISO_DATE_LEN)?;
    ISO_DATE_RE.is_match(prefix).then_some(prefix)
}

#[cfg(test)]
mod tests {
    use super::{date_prefix, parse_iso_date};

    #[test]
    fn date_prefix_accepts_timestamps() {
        assert_eq!(date_prefix("2017-06-12T10:00:00Z"), Some("2017-06-12"));
        assert_eq!(date_prefix("June 2017"), None);
        assert_eq!(date_prefix("2017"), None);
    }

    #[test]
    fn parse_iso_date_trims_input() {
        assert_eq!(parse_iso_date(" 2020-01-01 ").expect("valid"), "2020-01-01");
        assert!(parse_iso_date("2020/01/01").is_err());
    }
}
