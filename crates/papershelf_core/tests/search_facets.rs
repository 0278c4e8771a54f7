use papershelf_core::{
    parse_subject, DateRange, FilterError, FixtureSource, Paper, PaperQuery, PaperSource,
    SearchFilters, SUBJECTS,
};

fn ids(papers: &[&Paper]) -> Vec<String> {
    papers.iter().map(|paper| paper.id.clone()).collect()
}

fn catalogue() -> Vec<Paper> {
    FixtureSource::catalogue().load_papers().unwrap()
}

#[test]
fn empty_filters_match_everything() {
    let papers = catalogue();
    let filters = SearchFilters::default();
    assert!(filters.is_empty());
    assert_eq!(filters.apply(&papers).len(), papers.len());
}

#[test]
fn date_range_bounds_are_inclusive() {
    let papers = catalogue();
    let filters = SearchFilters {
        date_range: Some(DateRange::new(Some("2015-12-10"), Some("2018-10-11")).unwrap()),
        ..SearchFilters::default()
    };

    assert_eq!(ids(&filters.apply(&papers)), vec!["1", "2", "4"]);
}

#[test]
fn open_ended_ranges() {
    let papers = catalogue();

    let since = DateRange::new(Some("2019-01-01"), None).unwrap();
    assert_eq!(since.from(), Some("2019-01-01"));
    assert_eq!(since.to(), None);
    let filters = SearchFilters {
        date_range: Some(since),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filters.apply(&papers)), vec!["3", "6"]);

    let until = DateRange::new(None, Some("2014-12-31")).unwrap();
    let filters = SearchFilters {
        date_range: Some(until),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filters.apply(&papers)), vec!["5"]);
}

#[test]
fn date_range_rejects_bad_input() {
    assert_eq!(
        DateRange::new(Some("12/10/2015"), None).unwrap_err(),
        FilterError::InvalidDate("12/10/2015".to_string())
    );
    assert_eq!(
        DateRange::new(Some("2020-01-02"), Some("2020-01-01")).unwrap_err(),
        FilterError::ReversedRange {
            from: "2020-01-02".to_string(),
            to: "2020-01-01".to_string(),
        }
    );
}

#[test]
fn unshaped_paper_dates_never_match_active_range() {
    let mut paper = Paper::with_id("1", "Undated");
    paper.date = "Spring 2019".to_string();
    let range = DateRange::new(None, None).unwrap();
    assert!(!range.contains(paper.date.as_str()));
    assert!(range.contains("2019-04-01"));
}

#[test]
fn author_filter_is_trimmed_case_insensitive_substring() {
    let papers = catalogue();
    let filters = SearchFilters {
        author: "  GOODFELLOW ".to_string(),
        ..SearchFilters::default()
    };
    assert_eq!(ids(&filters.apply(&papers)), vec!["5"]);

    let blank = SearchFilters {
        author: "   ".to_string(),
        ..SearchFilters::default()
    };
    assert!(blank.is_empty());
}

#[test]
fn subject_filter_matches_subject_or_tag() {
    let mut tagged = Paper::with_id("t", "Tagged");
    tagged.tags = vec!["physics".to_string()];
    let mut labelled = Paper::with_id("l", "Labelled");
    labelled.subject = Some("Physics".to_string());
    let other = Paper::with_id("o", "Other");
    let papers = vec![tagged, labelled, other];

    let mut filters = SearchFilters::default();
    filters.set_subject("PHYSICS").unwrap();
    assert_eq!(filters.subject.as_deref(), Some("Physics"));
    assert_eq!(ids(&filters.apply(&papers)), vec!["t", "l"]);
}

#[test]
fn unknown_subject_is_rejected() {
    assert_eq!(SUBJECTS.len(), 10);
    assert_eq!(parse_subject(" social sciences ").unwrap(), "Social Sciences");
    assert_eq!(
        parse_subject("Astrology").unwrap_err(),
        FilterError::UnknownSubject("Astrology".to_string())
    );

    let mut filters = SearchFilters::default();
    assert!(filters.set_subject("Astrology").is_err());
    assert!(filters.subject.is_none());
}

#[test]
fn reset_clears_every_dimension() {
    let mut filters = SearchFilters {
        date_range: Some(DateRange::new(Some("2010-01-01"), None).unwrap()),
        author: "he".to_string(),
        subject: Some("Biology".to_string()),
    };
    assert!(!filters.is_empty());
    filters.reset();
    assert!(filters.is_empty());
    assert_eq!(filters, SearchFilters::default());
}

#[test]
fn filters_compose_with_text_query() {
    let papers = catalogue();
    let mut filters = SearchFilters {
        date_range: Some(DateRange::new(Some("2018-01-01"), None).unwrap()),
        ..SearchFilters::default()
    };
    filters.set_subject("computer science").unwrap();

    let query = PaperQuery::new("language").with_filters(filters);
    assert_eq!(ids(&query.apply(&papers)), vec!["2", "3", "6"]);
}
