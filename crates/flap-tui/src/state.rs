//! Application state for the board TUI.
//!
//! `AppState` owns the board and everything the reducer mutates. The
//! runtime holds it as a plain field; rendering reads it immutably.

use std::time::Duration;

use flap_core::alphabet::Alphabet;
use flap_core::board::Board;
use flap_core::config::{Config, Page};
use flap_core::layout::GridConfig;

use crate::statusline::StatusAccumulator;

/// Which view the app is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The rotating departure board.
    Board,
    /// Single-reel debug view with manual stepping.
    Flip,
}

/// TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Animation paused (ticks are dropped, input still handled).
    pub paused: bool,
    /// Active view.
    pub mode: Mode,
    /// The reel grid.
    pub board: Board,
    /// Pages rotated through in board mode.
    pub pages: Vec<Page>,
    /// Index of the page currently displayed.
    pub page_idx: usize,
    /// How long a settled page stays up.
    pub dwell: Duration,
    /// Remaining dwell time for the current page.
    pub dwell_left: Duration,
    /// Fixed grid dimensions from config; unset means fit the terminal.
    pub fixed_rows: Option<usize>,
    pub fixed_cols: Option<usize>,
    /// Whether the board has been sized to the terminal yet.
    pub sized: bool,
    /// Whether the status line is shown.
    pub show_status: bool,
    /// FPS accumulator for the status line.
    pub status: StatusAccumulator,
}

impl AppState {
    /// State for the rotating departure board.
    pub fn board(config: &Config, pages: Vec<Page>) -> Self {
        Self::new(config, Mode::Board, pages)
    }

    /// State for the single-flap debug view.
    pub fn flip(config: &Config) -> Self {
        // Manual stepping only: jitter has nothing to randomize here.
        Self::new(config, Mode::Flip, Vec::new())
    }

    fn new(config: &Config, mode: Mode, pages: Vec<Page>) -> Self {
        let timing = match mode {
            Mode::Board => config.timing(),
            Mode::Flip => config.timing().without_jitter(),
        };
        // Real dimensions arrive with the first Frame event.
        let grid = GridConfig::new(1, 1);
        let board = Board::new(grid, Alphabet::from_variant(config.alphabet), timing);

        let dwell = config.page_dwell();
        Self {
            should_quit: false,
            paused: false,
            mode,
            board,
            pages,
            page_idx: 0,
            dwell,
            dwell_left: dwell,
            fixed_rows: config.rows,
            fixed_cols: config.cols,
            sized: false,
            show_status: true,
            status: StatusAccumulator::new(),
        }
    }

    /// Rows of the page currently displayed (empty in flip mode).
    pub fn current_page_lines(&self) -> &[flap_core::layout::RowContent] {
        self.pages
            .get(self.page_idx)
            .map_or(&[], |page| page.lines.as_slice())
    }

    /// Displays the current page and restarts its dwell timer.
    pub fn show_current_page(&mut self) {
        let lines = self
            .pages
            .get(self.page_idx)
            .map(|page| page.lines.clone())
            .unwrap_or_default();
        self.board.display(&lines);
        self.dwell_left = self.dwell;
    }

    /// Advances to the next page (wrapping) and displays it.
    pub fn advance_page(&mut self) {
        if self.pages.len() > 1 {
            self.page_idx = (self.page_idx + 1) % self.pages.len();
        }
        self.show_current_page();
    }
}
