//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls
//! `update(state, event)` and executes the returned effects. This is the
//! single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::render;
use crate::state::{AppState, Mode};

/// The main reducer function.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Frame { width, height } => {
            handle_frame(state, width, height);
            vec![]
        }
        UiEvent::Tick { dt } => {
            handle_tick(state, dt);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, term_event),
    }
}

/// Per-frame sizing: derive the grid from the terminal and feed it to the
/// board wholesale when it changes. A resize is a fresh run, so the
/// current page is redisplayed from blank cells.
fn handle_frame(state: &mut AppState, width: u16, height: u16) {
    let grid = match state.mode {
        Mode::Board => render::grid_for_area(width, height, state.fixed_rows, state.fixed_cols),
        Mode::Flip => flap_core::layout::GridConfig::new(1, 1),
    };

    if state.sized && grid == state.board.grid() {
        return;
    }
    tracing::debug!(rows = grid.rows(), cols = grid.cols(), "grid sized");
    state.board.resize(grid);
    state.sized = true;
    if state.mode == Mode::Board {
        state.show_current_page();
    }
}

fn handle_tick(state: &mut AppState, dt: std::time::Duration) {
    if state.paused {
        return;
    }
    state.board.tick(dt);

    // Page rotation: once settled, run down the dwell timer, then flip
    // to the next page.
    if state.mode == Mode::Board && state.pages.len() > 1 && state.board.is_settled() {
        if let Some(left) = state.dwell_left.checked_sub(dt) {
            state.dwell_left = left;
        } else {
            state.advance_page();
        }
    }
}

fn handle_terminal_event(state: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(state, key),
        // Sizing is frame-driven; the resize event itself needs no work.
        Event::Resize(_, _) => vec![],
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    let ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        return vec![UiEffect::Quit];
    }

    match key.code {
        KeyCode::Char(' ') => match state.mode {
            // Manual single step; debounced by the reel while mid-flip.
            Mode::Flip => {
                state.board.trigger_step(0, 0);
            }
            Mode::Board => {
                if !state.pages.is_empty() {
                    state.advance_page();
                }
            }
        },
        KeyCode::Char('p') => {
            state.paused = !state.paused;
        }
        KeyCode::Char('d') => {
            state.show_status = !state.show_status;
        }
        KeyCode::Char('r') if state.mode == Mode::Board => {
            // Replay: tear the board down and flip the page in from blank.
            state.board.resize(state.board.grid());
            state.show_current_page();
        }
        _ => {}
    }
    vec![]
}
