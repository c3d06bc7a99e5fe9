//! Text-to-grid layout engine.
//!
//! Converts rows of left/right-aligned text into the flat array of target
//! symbols the board feeds its reels. Layout is a pure two-pass pipeline:
//! `create_layout` emits per-character placements, `apply_layout` resolves
//! them onto the grid. Overlaps are resolved by input order (later wins)
//! and out-of-grid placements are clipped, never reported as errors.

use serde::{Deserialize, Serialize};

/// The blank symbol every cell starts at.
pub const BLANK: char = ' ';

/// One board row's worth of input text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowContent {
    /// Text anchored to column 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// Text anchored to the last column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

impl RowContent {
    pub fn left(text: impl Into<String>) -> Self {
        Self {
            left: Some(text.into()),
            right: None,
        }
    }

    pub fn right(text: impl Into<String>) -> Self {
        Self {
            left: None,
            right: Some(text.into()),
        }
    }

    pub fn split(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: Some(left.into()),
            right: Some(right.into()),
        }
    }
}

/// One target symbol at a grid coordinate.
///
/// `col` is signed: a right-aligned run wider than the grid produces
/// negative columns, which exist only long enough for `apply_layout` to
/// clip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPlacement {
    pub row: usize,
    pub col: isize,
    pub symbol: char,
}

/// Immutable grid dimensions for one layout pass.
///
/// Owned by the display boundary and recomputed wholesale on resize; the
/// layout engine only ever reads a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    rows: usize,
    cols: usize,
}

impl GridConfig {
    /// Creates a grid, clamping both dimensions to a minimum of 1.
    ///
    /// The clamp is the boundary policy for degenerate viewports; the
    /// layout engine itself assumes `cols >= 1`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn total(&self) -> usize {
        self.rows * self.cols
    }
}

/// Emits one placement per character for each row's left and right runs.
///
/// Left runs start at column 0; right runs end at the last column. The
/// left group of a row is emitted before its right group, so when the two
/// overlap the right run wins downstream (later placements overwrite).
pub fn create_layout(rows: &[RowContent], cols: usize) -> Vec<TextPlacement> {
    let mut placements = Vec::new();

    for (row, content) in rows.iter().enumerate() {
        if let Some(left) = &content.left {
            for (i, symbol) in left.chars().enumerate() {
                placements.push(TextPlacement {
                    row,
                    col: i as isize,
                    symbol,
                });
            }
        }
        if let Some(right) = &content.right {
            let len = right.chars().count() as isize;
            for (i, symbol) in right.chars().enumerate() {
                placements.push(TextPlacement {
                    row,
                    col: cols as isize - len + i as isize,
                    symbol,
                });
            }
        }
    }

    placements
}

/// Resolves placements onto a flat grid of `total` cells.
///
/// Cells start blank. Placements apply in input order, so later placements
/// win at overlapping cells. A placement whose column is outside
/// `[0, cols)` or whose flat index is outside `[0, total)` is silently
/// dropped: clipping is the deliberate policy for text that overruns the
/// grid.
pub fn apply_layout(placements: &[TextPlacement], total: usize, cols: usize) -> Vec<char> {
    let mut cells = vec![BLANK; total];

    for placement in placements {
        if placement.col < 0 || placement.col >= cols as isize {
            continue;
        }
        let index = placement.row * cols + placement.col as usize;
        if index < total {
            cells[index] = placement.symbol;
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_and_right_runs_placed() {
        let rows = vec![RowContent::split("AB", "B")];
        let placements = create_layout(&rows, 3);
        let cells = apply_layout(&placements, 3, 3);
        assert_eq!(cells, vec!['A', 'B', 'B']);
    }

    #[test]
    fn test_right_run_overwrites_left_overlap() {
        // cols=2: right-aligned "B" lands on column 1, over left's "B".
        let rows = vec![RowContent::split("AB", "B")];
        let placements = create_layout(&rows, 2);
        let cells = apply_layout(&placements, 2, 2);
        assert_eq!(cells, vec!['A', 'B']);
    }

    #[test]
    fn test_row_overrun_clipped() {
        let placements = vec![
            TextPlacement {
                row: 0,
                col: 0,
                symbol: 'X',
            },
            TextPlacement {
                row: 5,
                col: 0,
                symbol: 'Y',
            },
        ];
        let cells = apply_layout(&placements, 8, 4);
        assert_eq!(cells[0], 'X');
        assert!(cells[1..].iter().all(|&c| c == BLANK));
    }

    #[test]
    fn test_column_overrun_clipped_not_wrapped() {
        // Left text wider than the grid must not spill into the next row.
        let rows = vec![RowContent::left("ABCDE"), RowContent::left("Z")];
        let placements = create_layout(&rows, 3);
        let cells = apply_layout(&placements, 6, 3);
        assert_eq!(cells, vec!['A', 'B', 'C', 'Z', BLANK, BLANK]);
    }

    #[test]
    fn test_oversized_right_run_clipped() {
        // Right text wider than the grid has negative columns; they drop.
        let rows = vec![RowContent::right("WXYZ")];
        let placements = create_layout(&rows, 2);
        let cells = apply_layout(&placements, 2, 2);
        assert_eq!(cells, vec!['Y', 'Z']);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let rows = vec![
            RowContent::split("DEPARTURES", "GATE"),
            RowContent::left("AMSTERDAM"),
        ];
        let first = apply_layout(&create_layout(&rows, 12), 24, 12);
        let second = apply_layout(&create_layout(&rows, 12), 24, 12);
        assert_eq!(first, second);
    }

    #[test]
    fn test_grid_config_clamps_to_one() {
        let grid = GridConfig::new(0, 0);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
        assert_eq!(grid.total(), 1);
    }

    #[test]
    fn test_empty_rows_all_blank() {
        let cells = apply_layout(&create_layout(&[], 4), 8, 4);
        assert!(cells.iter().all(|&c| c == BLANK));
    }
}
