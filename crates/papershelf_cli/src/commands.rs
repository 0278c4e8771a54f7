use std::fmt::Write as _;

use anyhow::{anyhow, Context, Result};
use papershelf_core::config::{parse_catalog, CATALOG_ENV, DATA_FILE_ENV, LOG_LEVEL_ENV};
use papershelf_core::logging::normalize_level;
use papershelf_core::view::home::{paper_card, NO_RESULTS_MESSAGE};
use papershelf_core::view::library::SUMMARY_BADGE_LABEL;
use papershelf_core::{
    core_version, init_logging, parse_view_mode, render_viewer, DateRange, FixtureSource,
    JsonFileSource, LibraryService, LibraryState, Paper, PaperQuery, PaperSource, SearchFilters,
    ShelfConfig, ViewerState, ViewerTab, SUBJECTS,
};

use crate::cli::{Cli, Commands, LibraryArgs, SearchArgs, ShowArgs};

type Service<'a> = LibraryService<&'a dyn PaperSource>;

pub fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(config.log_level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let name = command_name(&cli.command);
    match execute(cli.command, &config) {
        Ok(output) => {
            log::info!("event=cli_command module=cli status=ok command={name}");
            print!("{output}");
            Ok(())
        }
        Err(err) => {
            log::error!("event=cli_command module=cli status=error command={name} error={err}");
            Err(err)
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Search(_) => "search",
        Commands::Library(_) => "library",
        Commands::Show(_) => "show",
        Commands::Subjects => "subjects",
        Commands::Version => "version",
    }
}

/// Environment config with CLI flag overrides applied.
pub fn resolve_config(cli: &Cli) -> Result<ShelfConfig> {
    resolve_config_with(cli, |key| std::env::var(key).ok())
}

fn resolve_config_with<F>(cli: &Cli, env: F) -> Result<ShelfConfig>
where
    F: Fn(&str) -> Option<String>,
{
    // Variables shadowed by a flag are never read.
    let shadowed = |key: &str| match key {
        DATA_FILE_ENV => cli.data.is_some(),
        CATALOG_ENV => cli.catalog.is_some(),
        LOG_LEVEL_ENV => cli.log_level.is_some(),
        _ => false,
    };
    let mut config =
        ShelfConfig::from_lookup(|key| if shadowed(key) { None } else { env(key) })?;
    if let Some(path) = &cli.data {
        config.data_file = Some(path.clone());
    }
    if let Some(catalog) = cli.catalog.as_deref() {
        config.catalog = parse_catalog(catalog).map_err(|err| anyhow!(err))?;
    }
    if let Some(level) = cli.log_level.as_deref() {
        config.log_level = normalize_level(level).map_err(|err| anyhow!(err))?;
    }
    Ok(config)
}

pub fn execute(command: Commands, config: &ShelfConfig) -> Result<String> {
    match command {
        Commands::Version => Ok(format!("papershelf_core version={}\n", core_version())),
        Commands::Subjects => Ok(SUBJECTS
            .iter()
            .map(|subject| format!("{subject}\n"))
            .collect()),
        Commands::Search(args) => with_service(config, |service| search_output(service, &args)),
        Commands::Library(args) => {
            with_service(config, |service| library_output(service, &args))
        }
        Commands::Show(args) => with_service(config, |service| show_output(service, &args)),
    }
}

fn with_service<T>(config: &ShelfConfig, f: impl FnOnce(&Service<'_>) -> Result<T>) -> Result<T> {
    let json;
    let fixture;
    let source: &dyn PaperSource = match &config.data_file {
        Some(path) => {
            json = JsonFileSource::new(path.clone());
            &json
        }
        None => {
            fixture = FixtureSource::new(config.catalog);
            &fixture
        }
    };
    let service = LibraryService::load(source)
        .with_context(|| format!("failed to load papers from {}", source.describe()))?;
    f(&service)
}

pub fn search_output(service: &Service<'_>, args: &SearchArgs) -> Result<String> {
    let mode = parse_view_mode(args.mode.as_str())?;
    let mut filters = SearchFilters {
        author: args.author.clone().unwrap_or_default(),
        ..SearchFilters::default()
    };
    if args.from.is_some() || args.to.is_some() {
        filters.date_range = Some(DateRange::new(args.from.as_deref(), args.to.as_deref())?);
    }
    if let Some(subject) = args.subject.as_deref() {
        filters.set_subject(subject)?;
    }

    let query = PaperQuery::new(args.query.clone())
        .with_mode(mode)
        .with_filters(filters);
    let hits = service.search(&query);

    let mut out = String::new();
    writeln!(out, "Results ({})", hits.len())?;
    if hits.is_empty() {
        writeln!(out, "{NO_RESULTS_MESSAGE}")?;
        return Ok(out);
    }
    for paper in hits {
        let card = paper_card(paper, false);
        writeln!(out, "[{}] {}", paper.id, card.title)?;
        writeln!(out, "    {}", card.authors)?;
        writeln!(out, "    {} • {}", card.subject, card.date)?;
    }
    Ok(out)
}

pub fn library_output(service: &Service<'_>, args: &LibraryArgs) -> Result<String> {
    let state = LibraryState {
        query: args.query.clone(),
        mode: parse_view_mode(args.mode.as_str())?,
    };
    let listing = service.listing(&state);

    let mut out = String::new();
    writeln!(out, "My Library ({})", listing.mode.label())?;
    if let Some(empty) = listing.empty_state {
        writeln!(out, "{}", empty.title)?;
        writeln!(out, "{}", empty.hint)?;
        return Ok(out);
    }
    for card in &listing.cards {
        let paper = card.paper;
        if card.summary_badge {
            writeln!(
                out,
                "[{}] {}  [{SUMMARY_BADGE_LABEL}]",
                paper.id, paper.title
            )?;
        } else {
            writeln!(out, "[{}] {}", paper.id, paper.title)?;
        }
        writeln!(out, "    {}", paper.byline())?;
        if !paper.tags.is_empty() {
            writeln!(out, "    tags: {}", paper.tags.join(", "))?;
        }
        let actions = card
            .actions
            .available()
            .into_iter()
            .map(|action| action.label())
            .collect::<Vec<_>>();
        writeln!(out, "    actions: {}", actions.join(" | "))?;
    }
    Ok(out)
}

pub fn show_output(service: &Service<'_>, args: &ShowArgs) -> Result<String> {
    let paper: &Paper = service
        .get_paper(args.id.as_str())
        .ok_or_else(|| anyhow!("paper not found: {}", args.id))?;
    let mut state = ViewerState::default();
    if args.summary {
        state.select_tab(ViewerTab::Summary);
    }
    let panel = render_viewer(paper, &state);

    let mut out = String::new();
    writeln!(out, "{}", panel.title)?;
    writeln!(out, "{}", panel.byline)?;
    writeln!(out, "[{}] [Close]", panel.save_label)?;
    writeln!(out, "-- {} --", panel.tab.label())?;
    match panel.tab {
        ViewerTab::Pdf => match panel.pdf_url {
            Some(url) => writeln!(out, "{url}")?,
            None => writeln!(out, "PDF unavailable")?,
        },
        ViewerTab::Summary => {
            writeln!(out, "AI-Generated Summary [{}]", panel.summary_save_label)?;
            writeln!(out, "{}", panel.key_points_heading)?;
            for point in panel.key_points {
                writeln!(out, "  - {point}")?;
            }
            writeln!(out, "Abstract")?;
            writeln!(out, "{}", panel.abstract_text)?;
        }
    }
    Ok(out)
}
