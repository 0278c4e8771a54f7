use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "papershelf")]
#[command(about = "Browse, search and filter a paper library", version)]
pub struct Cli {
    /// JSON paper file. Overrides `PAPERSHELF_DATA`.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
    /// Built-in fixture set (`library` or `catalogue`) when no data file is used.
    #[arg(long, global = true)]
    pub catalog: Option<String>,
    /// Log level. Overrides `PAPERSHELF_LOG_LEVEL`; only used with a log dir.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Search papers by title, author or abstract.
    Search(SearchArgs),
    /// List saved papers with their card actions.
    Library(LibraryArgs),
    /// Show one paper in the viewer.
    Show(ShowArgs),
    /// List known subject areas.
    Subjects,
    /// Print the core version.
    Version,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(default_value = "", allow_hyphen_values = true)]
    pub query: String,
    /// `all` or `with-summaries`.
    #[arg(long, default_value = "all")]
    pub mode: String,
    /// Author name substring.
    #[arg(long)]
    pub author: Option<String>,
    /// Subject area, see `papershelf subjects`.
    #[arg(long)]
    pub subject: Option<String>,
    /// Earliest publication date (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<String>,
    /// Latest publication date (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<String>,
}

#[derive(Debug, Args)]
pub struct LibraryArgs {
    #[arg(default_value = "", allow_hyphen_values = true)]
    pub query: String,
    #[arg(long, default_value = "all")]
    pub mode: String,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
    /// Open the summary tab instead of the PDF tab.
    #[arg(long, default_value_t = false)]
    pub summary: bool,
}
