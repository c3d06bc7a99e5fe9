//! Full-screen TUI frontend for the split-flap board.
//!
//! Elm-style split: `state` holds the data, `update` is the pure reducer,
//! `render` draws without mutating, and `runtime` owns the terminal and
//! the frame loop that feeds measured tick deltas to the board.

pub mod effects;
pub mod events;
pub mod render;
pub mod runtime;
pub mod state;
pub mod statusline;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use flap_core::config::{Config, Page};
pub use runtime::TuiRuntime;
use state::{AppState, Mode};

/// Runs the rotating departure board.
pub fn run_board(config: &Config, pages: Vec<Page>) -> Result<()> {
    run(AppState::board(config, pages))
}

/// Runs the single-flap debug view: one reel, stepped manually.
pub fn run_flip(config: &Config) -> Result<()> {
    run(AppState::flip(config))
}

fn run(state: AppState) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!("flapboard needs a terminal to render the board.");
    }

    let mode = match state.mode {
        Mode::Board => "board",
        Mode::Flip => "flip",
    };
    tracing::info!(mode, "starting TUI");

    let mut runtime = TuiRuntime::new(state)?;
    runtime.run()
}
