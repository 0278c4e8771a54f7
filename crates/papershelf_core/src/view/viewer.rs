//! Paper viewer dialog state and projection.
//!
//! The PDF pane and annotation tools are rendered by an external viewer; this
//! module only tracks which tab is active and the save toggles.

use crate::model::paper::Paper;

/// Static key points shown in the summary tab until a summarization backend
/// exists.
pub const MOCK_SUMMARY_POINTS: &[&str] = &[
    "Introduces the Transformer architecture that relies entirely on attention mechanisms without recurrence or convolutions",
    "Achieves state-of-the-art results on machine translation tasks with significantly less training time",
    "Uses multi-head self-attention to allow the model to focus on different positions and representations",
    "Implements positional encoding to retain sequence order information",
    "Demonstrates superior performance on English-to-German and English-to-French translation tasks",
    "Requires less computational resources for training compared to previous architectures",
];

/// Viewer dialog tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewerTab {
    #[default]
    Pdf,
    Summary,
}

impl ViewerTab {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF View",
            Self::Summary => "Summary",
        }
    }
}

/// Viewer dialog state owned by the caller. Resets per dialog instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewerState {
    pub tab: ViewerTab,
    pub is_saved: bool,
    pub is_summary_saved: bool,
}

impl ViewerState {
    pub fn select_tab(&mut self, tab: ViewerTab) {
        self.tab = tab;
    }

    pub fn toggle_saved(&mut self) {
        self.is_saved = !self.is_saved;
    }

    pub fn toggle_summary_saved(&mut self) {
        self.is_summary_saved = !self.is_summary_saved;
    }
}

/// Rendered viewer dialog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerPanel<'a> {
    pub title: &'a str,
    pub byline: String,
    pub tab: ViewerTab,
    pub save_label: &'static str,
    pub summary_save_label: &'static str,
    /// `None` when the paper has no PDF link.
    pub pdf_url: Option<&'a str>,
    pub key_points_heading: String,
    pub key_points: &'static [&'static str],
    pub abstract_text: &'a str,
}

/// Projects `paper` and `state` into viewer content.
pub fn render_viewer<'a>(paper: &'a Paper, state: &ViewerState) -> ViewerPanel<'a> {
    ViewerPanel {
        title: paper.title.as_str(),
        byline: paper.byline(),
        tab: state.tab,
        save_label: if state.is_saved { "Saved" } else { "Save" },
        summary_save_label: if state.is_summary_saved {
            "Summary Saved"
        } else {
            "Save Summary"
        },
        pdf_url: paper.url.as_deref(),
        key_points_heading: format!("Key points extracted from \"{}\"", paper.title),
        key_points: MOCK_SUMMARY_POINTS,
        abstract_text: paper.abstract_text.as_str(),
    }
}
