use papershelf_core::view::home::{paper_card, NO_RESULTS_MESSAGE};
use papershelf_core::{
    render_home, DateRange, FixtureSource, HomeState, Paper, PaperAction, PaperSource,
    SearchFilters,
};

fn catalogue() -> Vec<Paper> {
    FixtureSource::catalogue().load_papers().unwrap()
}

#[test]
fn default_home_shows_every_result() {
    let papers = catalogue();
    let results = render_home(&papers, &HomeState::default());

    assert_eq!(results.heading, "Results (6)");
    assert_eq!(results.cards.len(), 6);
    assert_eq!(results.empty_message, None);
}

#[test]
fn query_narrows_results_and_updates_heading() {
    let papers = catalogue();
    let mut state = HomeState::default();
    state.set_query("Residual");

    let results = render_home(&papers, &state);
    assert_eq!(results.heading, "Results (1)");
    assert_eq!(results.cards[0].title, "Deep Residual Learning for Image Recognition");
}

#[test]
fn no_match_shows_empty_message() {
    let papers = catalogue();
    let mut state = HomeState::default();
    state.set_query("zzz-nomatch");

    let results = render_home(&papers, &state);
    assert_eq!(results.heading, "Results (0)");
    assert!(results.cards.is_empty());
    assert_eq!(results.empty_message, Some(NO_RESULTS_MESSAGE));
}

#[test]
fn applied_filters_narrow_results_until_reset() {
    let papers = catalogue();
    let mut state = HomeState::default();
    state.toggle_filters();
    assert!(state.show_filters);

    state.apply_filters(SearchFilters {
        date_range: Some(DateRange::new(None, Some("2016-01-01")).unwrap()),
        ..SearchFilters::default()
    });
    assert_eq!(render_home(&papers, &state).cards.len(), 2);

    state.reset_filters();
    assert_eq!(render_home(&papers, &state).cards.len(), 6);

    state.close_filters();
    assert!(!state.show_filters);
}

#[test]
fn open_and_close_viewer_keep_selection() {
    let papers = catalogue();
    let mut state = HomeState::default();
    assert!(state.selected_paper(&papers).is_none());

    state.open_paper("4");
    assert!(state.viewer_open);
    assert_eq!(
        state.selected_paper(&papers).unwrap().title,
        "Deep Residual Learning for Image Recognition"
    );

    state.close_viewer();
    assert!(!state.viewer_open);
    assert_eq!(state.selected.as_deref(), Some("4"));

    state.open_paper("5");
    assert!(state.viewer_open);
    assert_eq!(state.selected.as_deref(), Some("5"));
}

#[test]
fn favorites_toggle_and_show_on_cards() {
    let papers = catalogue();
    let mut state = HomeState::default();

    assert!(state.toggle_favorite("2"));
    let results = render_home(&papers, &state);
    assert!(results.cards[1].is_favorite);
    assert!(!results.cards[0].is_favorite);

    assert!(!state.toggle_favorite("2"));
    assert!(!state.is_favorite("2"));
}

#[test]
fn theme_toggles() {
    let mut state = HomeState::default();
    state.toggle_theme();
    assert!(state.dark_mode);
    state.toggle_theme();
    assert!(!state.dark_mode);
}

#[test]
fn card_projection_truncates_authors_and_defaults_subject() {
    let mut paper = Paper::with_id("9", "Understanding Deep Learning Requires Rethinking Generalization");
    paper.authors = ["Zhang, C.", "Bengio, S.", "Hardt, M.", "Recht, B.", "Vinyals, O."]
        .iter()
        .map(|a| a.to_string())
        .collect();
    paper.date = "2017-02-15".to_string();

    let card = paper_card(&paper, true);
    assert_eq!(card.authors, "Zhang, C., Bengio, S., Hardt, M. + 2 more");
    assert_eq!(card.subject, "Computer Science");
    assert_eq!(card.date, "2017-02-15");
    assert!(card.is_favorite);
    assert_eq!(card.view, PaperAction::View("9".to_string()));
    assert_eq!(card.toggle_favorite, PaperAction::ToggleFavorite("9".to_string()));

    paper.subject = Some("Mathematics".to_string());
    assert_eq!(paper_card(&paper, false).subject, "Mathematics");
}
