//! User actions emitted by paper cards and their callback seam.
//!
//! Actions are plain data so render projections can expose them as
//! capabilities; handlers decide what (if anything) to do with them.

use crate::model::paper::PaperId;

/// One card-level user action, bound to the paper it targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PaperAction {
    View(PaperId),
    Remove(PaperId),
    ExportSummary(PaperId),
    ToggleFavorite(PaperId),
}

impl PaperAction {
    /// Target paper id.
    pub fn paper_id(&self) -> &str {
        match self {
            Self::View(id)
            | Self::Remove(id)
            | Self::ExportSummary(id)
            | Self::ToggleFavorite(id) => id.as_str(),
        }
    }

    /// Button label shown for this action.
    pub fn label(&self) -> &'static str {
        match self {
            Self::View(_) => "View Paper",
            Self::Remove(_) => "Remove",
            Self::ExportSummary(_) => "Export Summary",
            Self::ToggleFavorite(_) => "Favorite",
        }
    }
}

/// Upward notifications for card actions. Every callback defaults to a no-op.
pub trait PaperActions {
    fn on_view(&mut self, _paper_id: &str) {}
    fn on_delete(&mut self, _paper_id: &str) {}
    fn on_export_summary(&mut self, _paper_id: &str) {}
    fn on_toggle_favorite(&mut self, _paper_id: &str) {}
}

/// Handler that ignores every action.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopActions;

impl PaperActions for NoopActions {}

/// Routes `action` to the matching callback on `handler`.
pub fn dispatch<H: PaperActions + ?Sized>(action: &PaperAction, handler: &mut H) {
    log::debug!(
        "event=paper_action module=view status=ok action={} paper_id={}",
        action_name(action),
        action.paper_id()
    );
    match action {
        PaperAction::View(id) => handler.on_view(id),
        PaperAction::Remove(id) => handler.on_delete(id),
        PaperAction::ExportSummary(id) => handler.on_export_summary(id),
        PaperAction::ToggleFavorite(id) => handler.on_toggle_favorite(id),
    }
}

fn action_name(action: &PaperAction) -> &'static str {
    match action {
        PaperAction::View(_) => "view",
        PaperAction::Remove(_) => "remove",
        PaperAction::ExportSummary(_) => "export_summary",
        PaperAction::ToggleFavorite(_) => "toggle_favorite",
    }
}
