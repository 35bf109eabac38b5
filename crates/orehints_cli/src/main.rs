//! OreHints - generated-resource entrypoint.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orehints_cli::actions::{self, Options};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Action {
    /// Remove generated resources from every output root
    Clean,
    /// Check that re-running generation would change no committed file
    Validate,
    /// Generate everything
    All,
    /// Generate world generation data and the source language file
    Worldgen,
    /// Generate the field guide book
    Book,
    /// Check that translation files are canonically formatted
    FormatLang,
    /// Rewrite translation files into canonical form
    UpdateLang,
}

#[derive(Parser)]
#[command(name = "orehints")]
#[command(about = "Generates ore vein worldgen data and field guide resources")]
struct Cli {
    /// Actions to run, in order
    #[arg(required = true, value_enum)]
    actions: Vec<Action>,

    /// Build the book for a single language
    #[arg(long, default_value = "en_us")]
    translate: String,

    /// Build the book for every supported language
    #[arg(long)]
    translate_all: bool,

    /// Local game instance directory, for hot-reloadable book and clean
    #[arg(long)]
    local: Option<PathBuf>,

    /// Also generate resources to --hotswap-dir
    #[arg(long)]
    hotswap: bool,

    /// Output root used with --hotswap
    #[arg(long, default_value = "out/production/resources")]
    hotswap_dir: PathBuf,

    /// Primary generated-resource root
    #[arg(long, default_value = "resources/generated")]
    resource_dir: PathBuf,

    /// Directory of hand-maintained translation files
    #[arg(long, default_value = "resources/lang")]
    lang_dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let opts = Options {
        resource_dir: cli.resource_dir,
        lang_dir: cli.lang_dir,
        local: cli.local,
        hotswap: cli.hotswap.then_some(cli.hotswap_dir),
        translate: cli.translate,
        translate_all: cli.translate_all,
    };

    let mut ok = true;
    for action in cli.actions {
        ok &= match action {
            Action::Clean => actions::run_clean(&opts),
            Action::Validate => actions::run_validate(&opts),
            Action::All | Action::Worldgen => actions::run_worldgen(&opts),
            Action::Book => actions::run_book(&opts),
            Action::FormatLang => actions::run_format_lang(&opts),
            Action::UpdateLang => actions::run_update_lang(&opts),
        };
    }

    if !ok {
        std::process::exit(1);
    }
}
