//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use flap_core::config::{Config, Page, paths};
use flap_core::layout::RowContent;

mod commands;

#[derive(Parser)]
#[command(name = "flapboard")]
#[command(version)]
#[command(about = "Split-flap departure board for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    board_args: BoardArgs,
}

/// Arguments for the default board mode.
#[derive(clap::Args, Debug, Clone, Default)]
struct BoardArgs {
    /// Fix the number of board rows instead of filling the terminal
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Fix the number of board columns instead of filling the terminal
    #[arg(long, value_name = "N")]
    cols: Option<usize>,

    /// Show a single page of literal text instead of the configured pages.
    /// Repeat for multiple rows; "LEFT|RIGHT" right-aligns the second part.
    #[arg(long, value_name = "ROW")]
    text: Vec<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Single-reel debug view: one large flap, stepped with space
    Flip,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Print the resolved configuration as TOML
    Show,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().context("load config")?;

    match cli.command {
        None => {
            if let Some(rows) = cli.board_args.rows {
                config.rows = Some(rows);
            }
            if let Some(cols) = cli.board_args.cols {
                config.cols = Some(cols);
            }
            let pages = if cli.board_args.text.is_empty() {
                config.effective_pages()
            } else {
                vec![page_from_text(&cli.board_args.text)]
            };

            let _guard = crate::logging::init()?;
            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                pages = pages.len(),
                "flapboard boot"
            );
            flap_tui::run_board(&config, pages)
        }

        Some(Commands::Flip) => {
            let _guard = crate::logging::init()?;
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "flapboard boot");
            flap_tui::run_flip(&config)
        }

        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Show => commands::config::show(&config),
            ConfigCommands::Init => commands::config::init(&paths::config_path()),
        },
    }
}

/// Builds a one-page board from `--text` rows. A `|` splits a row into a
/// left-aligned and a right-aligned run.
fn page_from_text(rows: &[String]) -> Page {
    let lines = rows
        .iter()
        .map(|row| match row.split_once('|') {
            Some((left, right)) => RowContent::split(left, right),
            None => RowContent::left(row.clone()),
        })
        .collect();
    Page { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_row_without_pipe_is_left_aligned() {
        let page = page_from_text(&["GATE 12".to_string()]);
        assert_eq!(page.lines, vec![RowContent::left("GATE 12")]);
    }

    #[test]
    fn test_text_row_with_pipe_splits() {
        let page = page_from_text(&["AMSTERDAM|KL1021".to_string()]);
        assert_eq!(page.lines, vec![RowContent::split("AMSTERDAM", "KL1021")]);
    }

    #[test]
    fn test_text_rows_keep_order() {
        let rows = vec!["A".to_string(), "B|C".to_string()];
        let page = page_from_text(&rows);
        assert_eq!(page.lines.len(), 2);
        assert_eq!(page.lines[0], RowContent::left("A"));
        assert_eq!(page.lines[1], RowContent::split("B", "C"));
    }
}
