mod content;
mod error;
mod fx;
mod theme;
mod tui;
mod viewport;

use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};

use crate::{
    error::Result,
    theme::{ThemeRegistry, ThemeStore},
};

#[derive(Parser)]
#[command(name = "folio-tui")]
#[command(about = "Terminal portfolio of Sourav Kumar Biswas")]
struct Cli {
    /// Theme key to start on; unknown keys fall back to the default.
    #[arg(long, default_value = theme::DEFAULT_KEY)]
    theme: String,

    /// Extra themes file (JSON). Defaults to
    /// `<config dir>/folio-tui/themes.json` when present.
    #[arg(long)]
    themes_file: Option<PathBuf>,

    /// Animation tick interval in milliseconds.
    #[arg(long, default_value_t = 50)]
    tick_rate: u64,

    /// Write logs to this file (the TUI owns the terminal).
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available themes and exit
    Themes,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logging goes to a file; the terminal belongs to the TUI.
    if let Some(path) = &cli.log_file {
        let log_file = std::fs::File::create(path).expect("Failed to create log file");
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("folio_tui=info".parse().unwrap()),
            )
            .with_writer(log_file)
            .with_ansi(false)
            .with_target(false)
            .init();
    }

    let result = match cli.command {
        Some(Commands::Themes) => list_themes(&cli),
        None => run_tui(&cli).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Build the registry (built-ins plus any themes file) and the store,
/// applying the startup theme.
fn build_store(cli: &Cli) -> Result<ThemeStore> {
    let mut registry = ThemeRegistry::builtin();

    let path = cli
        .themes_file
        .clone()
        .or_else(theme::default_themes_path);
    if let Some(path) = path {
        // An explicitly given file must load; the default location is
        // optional.
        if cli.themes_file.is_some() || path.exists() {
            for (key, entry) in theme::load_themes_file(&path)? {
                registry.register(key, entry)?;
            }
        }
    }

    tracing::info!(themes = registry.len(), "theme registry ready");
    let store = ThemeStore::new(registry);
    // Unknown startup keys leave the default active, matching the
    // setter's no-op contract.
    store.set_theme(&cli.theme);
    Ok(store)
}

async fn run_tui(cli: &Cli) -> Result<()> {
    let store = build_store(cli)?;
    tui::run(store, Duration::from_millis(cli.tick_rate.max(1))).await
}

fn list_themes(cli: &Cli) -> Result<()> {
    let store = build_store(cli)?;
    for (key, entry) in store.themes() {
        println!(
            "{key:<10} {name:<16} {primary} {secondary} {accent}",
            name = entry.name,
            primary = entry.primary,
            secondary = entry.secondary,
            accent = entry.accent,
        );
    }
    Ok(())
}
