//! Board aggregate: one reel and clock per grid cell.
//!
//! The board owns the alphabet, the grid snapshot, and the cells. It runs
//! the layout engine to turn row text into per-cell targets, arms each
//! animating cell with its own start jitter, and fans the host's frame
//! tick out to every cell's clock. Resize is a wholesale fresh run: all
//! cells are torn down and rebuilt blank, which also drops any scheduled
//! work they still had.

use std::time::Duration;

use crate::alphabet::Alphabet;
use crate::layout::{BLANK, GridConfig, RowContent, apply_layout, create_layout};
use crate::reel::{Reel, ReelState};
use crate::schedule::{FlipTiming, StepClock, start_jitter};

/// One grid cell: a reel and the clock that drives it.
#[derive(Debug, Clone)]
struct ReelCell {
    reel: Reel,
    clock: StepClock,
}

impl ReelCell {
    fn blank(id: usize, timing: FlipTiming) -> Self {
        Self {
            reel: Reel::new(id, BLANK),
            clock: StepClock::new(timing),
        }
    }
}

/// A grid of independently animating reels.
pub struct Board {
    grid: GridConfig,
    alphabet: Alphabet,
    timing: FlipTiming,
    cells: Vec<ReelCell>,
}

impl Board {
    /// Creates a board of blank, idle reels.
    pub fn new(grid: GridConfig, alphabet: Alphabet, timing: FlipTiming) -> Self {
        let cells = (0..grid.total())
            .map(|id| ReelCell::blank(id, timing))
            .collect();
        Self {
            grid,
            alphabet,
            timing,
            cells,
        }
    }

    pub fn grid(&self) -> GridConfig {
        self.grid
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Lays out `rows` and points every cell at its new target symbol.
    ///
    /// Cells starting from rest get an independent random start delay so
    /// a fresh page never flips in lockstep; cells already mid-flip carry
    /// straight on toward the new target. Cells already showing their
    /// target (and cells given a blank target) stay put.
    pub fn display(&mut self, rows: &[RowContent]) {
        let placements = create_layout(rows, self.grid.cols());
        let targets = apply_layout(&placements, self.grid.total(), self.grid.cols());

        let mut armed = 0usize;
        for (cell, &target) in self.cells.iter_mut().zip(targets.iter()) {
            if cell.reel.set_target(target) {
                // A reel mid-flip keeps its running clock; the in-flight
                // step finishes on schedule and continues toward the new
                // target. Jitter only delays reels starting from rest.
                if !cell.reel.state().animating {
                    cell.clock.arm(start_jitter(self.timing.jitter_max));
                    armed += 1;
                }
            } else if !cell.reel.state().animating {
                cell.clock.clear();
            }
        }
        tracing::debug!(cells = self.cells.len(), armed, "board display pass");
    }

    /// Advances every cell's timeline by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for cell in &mut self.cells {
            cell.clock.tick(dt, &mut cell.reel, &self.alphabet);
        }
    }

    /// Tears down all cells and rebuilds the board blank at `grid`.
    ///
    /// Dropping the old cells drops their clocks, so nothing scheduled
    /// for a dead reel can ever fire.
    pub fn resize(&mut self, grid: GridConfig) {
        self.grid = grid;
        self.cells = (0..grid.total())
            .map(|id| ReelCell::blank(id, self.timing))
            .collect();
    }

    /// True once every reel has reached its target and gone Idle.
    pub fn is_settled(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.reel.is_settled() && cell.clock.is_idle())
    }

    /// The reel state at `(row, col)`, if inside the grid.
    pub fn reel(&self, row: usize, col: usize) -> Option<&ReelState> {
        if col >= self.grid.cols() {
            return None;
        }
        self.cells
            .get(row * self.grid.cols() + col)
            .map(|cell| cell.reel.state())
    }

    /// Manually advances the reel at `(row, col)` by one alphabet step.
    ///
    /// Debounced: a no-op while that reel is mid-flip.
    pub fn trigger_step(&mut self, row: usize, col: usize) -> bool {
        if col >= self.grid.cols() {
            return false;
        }
        let index = row * self.grid.cols() + col;
        let Some(cell) = self.cells.get_mut(index) else {
            return false;
        };
        cell.clock.trigger_manual(&mut cell.reel, &self.alphabet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_board(rows: usize, cols: usize) -> Board {
        Board::new(
            GridConfig::new(rows, cols),
            Alphabet::board(),
            FlipTiming::default().without_jitter(),
        )
    }

    /// Ticks until settled or the step budget is exhausted.
    fn settle(board: &mut Board) {
        for _ in 0..4000 {
            if board.is_settled() {
                return;
            }
            board.tick(Duration::from_millis(16));
        }
        panic!("board failed to settle");
    }

    #[test]
    fn test_display_reaches_targets() {
        let mut board = test_board(1, 4);
        board.display(&[RowContent::left("GATE")]);
        settle(&mut board);
        let shown: String = (0..4)
            .map(|col| board.reel(0, col).expect("in grid").current)
            .collect();
        assert_eq!(shown, "GATE");
    }

    #[test]
    fn test_right_alignment_on_board() {
        let mut board = test_board(1, 6);
        board.display(&[RowContent::split("AB", "19")]);
        settle(&mut board);
        let shown: String = (0..6)
            .map(|col| board.reel(0, col).expect("in grid").current)
            .collect();
        assert_eq!(shown, "AB  19");
    }

    #[test]
    fn test_blank_board_is_settled() {
        let board = test_board(2, 3);
        assert!(board.is_settled());
    }

    #[test]
    fn test_matching_redisplay_is_noop() {
        let mut board = test_board(1, 2);
        board.display(&[RowContent::left("OK")]);
        settle(&mut board);
        board.display(&[RowContent::left("OK")]);
        assert!(board.is_settled());
    }

    #[test]
    fn test_resize_rebuilds_blank() {
        let mut board = test_board(1, 4);
        board.display(&[RowContent::left("GATE")]);
        settle(&mut board);

        board.resize(GridConfig::new(2, 2));
        assert!(board.is_settled());
        assert_eq!(board.reel(0, 0).expect("in grid").current, BLANK);
        assert_eq!(board.reel(1, 1).expect("in grid").current, BLANK);
        assert!(board.reel(2, 0).is_none());
    }

    #[test]
    fn test_resize_mid_animation_cancels_runs() {
        let mut board = test_board(1, 4);
        board.display(&[RowContent::left("ZZZZ")]);
        board.tick(Duration::from_millis(50));
        assert!(!board.is_settled());

        board.resize(GridConfig::new(1, 4));
        // Fresh cells: idle, blank, nothing scheduled.
        assert!(board.is_settled());
        board.tick(Duration::from_secs(60));
        assert_eq!(board.reel(0, 0).expect("in grid").current, BLANK);
    }

    #[test]
    fn test_retarget_mid_flip_keeps_step_running() {
        // Default timing: 250ms step. Get the single reel halfway
        // through its first flip toward 'A'.
        let mut board = test_board(1, 1);
        board.display(&[RowContent::left("A")]);
        board.tick(Duration::from_millis(125));
        let state = *board.reel(0, 0).expect("in grid");
        assert!(state.animating);
        assert!(state.progress > 0.0);

        // A new target must not restart or stall the in-flight step.
        board.display(&[RowContent::left("B")]);
        let retargeted = *board.reel(0, 0).expect("in grid");
        assert!(retargeted.animating);
        assert!((retargeted.progress - state.progress).abs() < f32::EPSILON);

        // The step commits on its original schedule, then runs on to 'B'.
        board.tick(Duration::from_millis(125));
        assert_eq!(board.reel(0, 0).expect("in grid").current, 'A');
        settle(&mut board);
        assert_eq!(board.reel(0, 0).expect("in grid").current, 'B');
    }

    #[test]
    fn test_reel_accessor_rejects_out_of_grid() {
        let board = test_board(2, 3);
        assert!(board.reel(0, 3).is_none());
        assert!(board.reel(2, 0).is_none());
        assert!(board.reel(1, 2).is_some());
    }

    #[test]
    fn test_trigger_step_advances_single_reel() {
        let mut board = test_board(1, 2);
        assert!(board.trigger_step(0, 0));
        board.tick(Duration::from_secs(1));
        assert_eq!(board.reel(0, 0).expect("in grid").current, 'A');
        assert_eq!(board.reel(0, 1).expect("in grid").current, BLANK);
    }
}
