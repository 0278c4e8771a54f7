//! Case-insensitive substring search over paper text fields.
//!
//! # Invariants
//! - An empty query matches every paper.
//! - Result order equals input order.
//! - Only title, author names and abstract are searched; tags are not.

use crate::model::paper::Paper;

/// Returns whether `paper` matches `query`.
///
/// The query is lowercased but not trimmed.
pub fn matches_query(paper: &Paper, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_lowercased(paper, needle.as_str())
}

/// Keeps papers whose title, any author, or abstract contains `query`.
///
/// Accepts any iterator of paper references, so it composes with
/// [`crate::search::mode::restrict`] in either order.
pub fn filter_papers<'a, I>(papers: I, query: &str) -> Vec<&'a Paper>
where
    I: IntoIterator<Item = &'a Paper>,
{
    let needle = query.to_lowercase();
    papers
        .into_iter()
        .filter(|paper| matches_lowercased(paper, needle.as_str()))
        .collect()
}

fn matches_lowercased(paper: &Paper, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    paper.title.to_lowercase().contains(needle)
        || paper
            .authors
            .iter()
            .any(|author| author.to_lowercase().contains(needle))
        || paper.abstract_text.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::matches_lowercased;
    use crate::model::paper::Paper;

    #[test]
    fn tags_are_not_searched() {
        let mut paper = Paper::with_id("1", "Deep Residual Learning");
        paper.tags = vec!["vision".to_string()];
        assert!(!matches_lowercased(&paper, "vision"));
    }

    #[test]
    fn empty_needle_short_circuits() {
        let paper = Paper::with_id("1", "x");
        assert!(matches_lowercased(&paper, ""));
    }
}
