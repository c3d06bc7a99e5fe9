//! Pure view/render functions for the board TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui frame, and never mutate state or return effects. Each reel is
//! drawn as a two-line cell: the top flap half above the bottom flap
//! half, sampled from the core's pure flap-frame function.

use flap_core::flap::{FlapFrame, sample_flap};
use flap_core::layout::GridConfig;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::state::{AppState, Mode};
use crate::statusline::status_line;

/// Total width of one reel cell (glyph column plus gap).
pub const CELL_WIDTH: u16 = 4;

/// Total height of one reel cell (two flap halves plus gap).
pub const CELL_HEIGHT: u16 = 3;

/// Outer margin around the board.
const BOARD_MARGIN: u16 = 1;

/// Height of the status line below the board.
const STATUS_HEIGHT: u16 = 1;

/// Rotation (degrees) beyond which a flap half reads as edge-on and is
/// drawn as a fold line instead of its symbol.
const EDGE_ON_DEG: f32 = 60.0;

/// Glyph for an edge-on flap half.
const FOLD_GLYPH: char = '─';

/// Board backdrop (between cells).
const BACKDROP: Color = Color::Rgb(14, 14, 14);

/// Card face background.
const CARD: Color = Color::Rgb(34, 34, 34);

/// Grid dimensions that fit the given terminal area, honoring fixed
/// overrides from config. Both dimensions clamp to a minimum of 1.
pub fn grid_for_area(
    width: u16,
    height: u16,
    fixed_rows: Option<usize>,
    fixed_cols: Option<usize>,
) -> GridConfig {
    let usable_width = width.saturating_sub(BOARD_MARGIN * 2);
    let usable_height = height.saturating_sub(BOARD_MARGIN * 2 + STATUS_HEIGHT);
    let fit_rows = usize::from(usable_height / CELL_HEIGHT);
    let fit_cols = usize::from(usable_width / CELL_WIDTH);
    GridConfig::new(
        fixed_rows.unwrap_or(fit_rows).min(fit_rows.max(1)),
        fixed_cols.unwrap_or(fit_cols).min(fit_cols.max(1)),
    )
}

/// The character a flap half shows at a given rotation.
///
/// Past `EDGE_ON_DEG` the card is mostly side-on to the viewer, so the
/// symbol collapses to a fold line.
pub fn half_glyph(symbol: char, angle: f32) -> char {
    if angle.abs() >= EDGE_ON_DEG {
        FOLD_GLYPH
    } else {
        symbol
    }
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BACKDROP)), area);

    render_board(app, frame, area);

    if app.mode == Mode::Flip {
        render_flip_readout(app, frame, area);
    }

    if app.show_status {
        render_status(app, frame, area);
    }
}

fn render_board(app: &AppState, frame: &mut Frame, area: Rect) {
    let grid = app.board.grid();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let Some(reel) = app.board.reel(row, col) else {
                continue;
            };
            let x = area.x + BOARD_MARGIN + col as u16 * CELL_WIDTH;
            let y = area.y + BOARD_MARGIN + row as u16 * CELL_HEIGHT;
            if x + CELL_WIDTH > area.right() || y + CELL_HEIGHT > area.bottom() {
                continue;
            }

            let flap = sample_flap(reel.current, reel.next, reel.progress);
            render_cell(frame, x, y, &flap);
        }
    }
}

/// Draws one reel cell: top half line over bottom half line.
fn render_cell(frame: &mut Frame, x: u16, y: u16, flap: &FlapFrame) {
    let (top_char, top_rotating) = if flap.top_visible {
        (half_glyph(flap.rotating_top, flap.top_angle), true)
    } else {
        (flap.top_background, false)
    };
    let (bottom_char, bottom_rotating) = if flap.bottom_visible {
        (half_glyph(flap.rotating_bottom, flap.bottom_angle), true)
    } else {
        (flap.bottom_background, false)
    };

    let top_area = Rect::new(x, y, CELL_WIDTH - 1, 1);
    let bottom_area = Rect::new(x, y + 1, CELL_WIDTH - 1, 1);
    frame.render_widget(half_widget(top_char, top_rotating), top_area);
    frame.render_widget(half_widget(bottom_char, bottom_rotating), bottom_area);
}

fn half_widget(symbol: char, rotating: bool) -> Paragraph<'static> {
    let mut style = Style::default()
        .bg(CARD)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    if rotating {
        style = style.add_modifier(Modifier::DIM);
    }
    Paragraph::new(Line::from(Span::styled(format!(" {symbol} "), style)))
}

/// Current / next / progress readout under the single debug reel.
fn render_flip_readout(app: &AppState, frame: &mut Frame, area: Rect) {
    let Some(reel) = app.board.reel(0, 0) else {
        return;
    };
    let y = area.y + BOARD_MARGIN + CELL_HEIGHT + 1;
    if y + 3 > area.bottom() {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Gray);
    let display = |c: char| if c == ' ' { "(blank)".to_string() } else { c.to_string() };

    let lines = vec![
        Line::from(vec![
            Span::styled("current  ", label),
            Span::styled(display(reel.current), value),
        ]),
        Line::from(vec![
            Span::styled("next     ", label),
            Span::styled(display(reel.next), value),
        ]),
        Line::from(vec![
            Span::styled("progress ", label),
            Span::styled(format!("{:>3.0}%", reel.progress), value),
        ]),
    ];
    let readout = Rect::new(area.x + BOARD_MARGIN, y, area.width.saturating_sub(2), 3);
    frame.render_widget(Paragraph::new(lines), readout);
}

fn render_status(app: &AppState, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let page = match app.mode {
        Mode::Board if !app.pages.is_empty() => Some((app.page_idx, app.pages.len())),
        _ => None,
    };
    let hints = match app.mode {
        Mode::Board => "space next  p pause  r replay  q quit",
        Mode::Flip => "space flip  q quit",
    };
    let line = status_line(page, app.paused, app.status.fps(), hints);
    let status_area = Rect::new(area.x, area.bottom() - STATUS_HEIGHT, area.width, 1);
    frame.render_widget(Paragraph::new(line), status_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_fits_terminal() {
        // 80x24 minus margins/status: 78 wide, 21 tall.
        let grid = grid_for_area(80, 24, None, None);
        assert_eq!(grid.cols(), 19);
        assert_eq!(grid.rows(), 7);
    }

    #[test]
    fn test_degenerate_terminal_clamps_to_one() {
        let grid = grid_for_area(0, 0, None, None);
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
    }

    #[test]
    fn test_fixed_dims_capped_by_terminal() {
        let grid = grid_for_area(80, 24, Some(100), Some(3));
        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.cols(), 3);
    }

    #[test]
    fn test_half_glyph_folds_near_edge_on() {
        assert_eq!(half_glyph('A', -10.0), 'A');
        assert_eq!(half_glyph('A', -75.0), FOLD_GLYPH);
        assert_eq!(half_glyph('B', 88.0), FOLD_GLYPH);
    }
}
