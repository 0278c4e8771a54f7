use papershelf_core::{
    dispatch, render_library, FixtureSource, LibraryService, LibraryState, NoopActions, Paper,
    PaperAction, PaperActions, PaperSource, ViewMode,
};

#[derive(Default)]
struct RecordingActions {
    calls: Vec<String>,
}

impl PaperActions for RecordingActions {
    fn on_view(&mut self, paper_id: &str) {
        self.calls.push(format!("view:{paper_id}"));
    }

    fn on_delete(&mut self, paper_id: &str) {
        self.calls.push(format!("delete:{paper_id}"));
    }

    fn on_export_summary(&mut self, paper_id: &str) {
        self.calls.push(format!("export:{paper_id}"));
    }
}

fn library() -> Vec<Paper> {
    FixtureSource::library().load_papers().unwrap()
}

fn card_ids(papers: &[Paper], state: &LibraryState) -> Vec<String> {
    render_library(papers, state)
        .cards
        .iter()
        .map(|card| card.paper.id.clone())
        .collect()
}

#[test]
fn default_state_lists_every_paper_in_order() {
    let papers = library();
    let listing = render_library(&papers, &LibraryState::default());

    assert_eq!(listing.mode, ViewMode::All);
    assert_eq!(listing.cards.len(), 3);
    assert!(listing.empty_state.is_none());
    assert_eq!(card_ids(&papers, &LibraryState::default()), vec!["1", "2", "3"]);
}

#[test]
fn export_capability_follows_summary_flag() {
    let papers = library();
    let listing = render_library(&papers, &LibraryState::default());

    let attention = &listing.cards[0];
    assert!(attention.summary_badge);
    assert_eq!(
        attention.actions.export_summary,
        Some(PaperAction::ExportSummary("1".to_string()))
    );

    let gpt = &listing.cards[2];
    assert!(!gpt.summary_badge);
    assert_eq!(gpt.actions.export_summary, None);
    assert_eq!(gpt.actions.view, PaperAction::View("3".to_string()));
    assert_eq!(gpt.actions.remove, PaperAction::Remove("3".to_string()));
    assert_eq!(
        gpt.actions
            .available()
            .into_iter()
            .map(PaperAction::label)
            .collect::<Vec<_>>(),
        vec!["View Paper", "Remove"]
    );
}

#[test]
fn with_summaries_tab_offers_export_on_every_card() {
    let papers = library();
    let state = LibraryState {
        query: String::new(),
        mode: ViewMode::WithSummaries,
    };
    let listing = render_library(&papers, &state);

    assert_eq!(listing.cards.len(), 2);
    assert!(listing
        .cards
        .iter()
        .all(|card| card.actions.export_summary.is_some()));
}

#[test]
fn empty_state_depends_on_mode_and_query() {
    let papers = library();

    let mut state = LibraryState::default();
    state.set_query("zzz-nomatch");
    let empty = render_library(&papers, &state).empty_state.unwrap();
    assert_eq!(empty.title, "No saved papers found");
    assert_eq!(empty.hint, "Try a different search term");

    let none: Vec<Paper> = Vec::new();
    let empty = render_library(&none, &LibraryState::default())
        .empty_state
        .unwrap();
    assert_eq!(empty.hint, "Save papers to your library to view them here");

    state.set_mode(ViewMode::WithSummaries);
    let empty = render_library(&papers, &state).empty_state.unwrap();
    assert_eq!(empty.title, "No papers with summaries");
    assert_eq!(
        empty.hint,
        "Generate summaries for your saved papers to see them here"
    );
}

#[test]
fn mode_switches_freely_in_both_directions() {
    let papers = library();
    let mut state = LibraryState::default();

    state.set_mode(ViewMode::WithSummaries);
    assert_eq!(card_ids(&papers, &state), vec!["1", "2"]);
    state.set_mode(ViewMode::All);
    assert_eq!(card_ids(&papers, &state), vec!["1", "2", "3"]);
    state.set_mode(ViewMode::WithSummaries);
    assert_eq!(card_ids(&papers, &state), vec!["1", "2"]);
}

#[test]
fn dispatch_routes_card_actions_to_callbacks() {
    let papers = library();
    let listing = render_library(&papers, &LibraryState::default());
    let mut handler = RecordingActions::default();

    for card in &listing.cards {
        for action in card.actions.available() {
            dispatch(action, &mut handler);
        }
    }
    dispatch(&PaperAction::ToggleFavorite("1".to_string()), &mut handler);

    assert_eq!(
        handler.calls,
        vec![
            "view:1", "export:1", "delete:1", "view:2", "export:2", "delete:2", "view:3",
            "delete:3",
        ]
    );

    let mut noop = NoopActions;
    dispatch(&PaperAction::Remove("1".to_string()), &mut noop);
}

#[test]
fn service_listing_matches_free_render() {
    let service = LibraryService::load(FixtureSource::library()).unwrap();
    let state = LibraryState {
        query: "transformers".to_string(),
        mode: ViewMode::All,
    };

    let listing = service.listing(&state);
    assert_eq!(listing, render_library(service.papers(), &state));
    assert_eq!(listing.cards.len(), 1);
    assert_eq!(listing.cards[0].paper.id, "2");
}
