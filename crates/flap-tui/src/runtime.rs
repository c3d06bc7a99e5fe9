//! TUI runtime - owns the terminal, runs the frame loop, executes effects.
//!
//! All side effects happen here. The reducer stays pure and produces
//! effects; this module executes them. Ticks carry the measured wall-clock
//! delta since the previous tick, so reel timelines advance at real time
//! regardless of render cadence.

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame rate while reels are flipping (60fps = ~16ms per frame).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when every reel is settled. Longer timeout reduces CPU
/// usage when nothing is moving.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on panic and on exit.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a render occurred (for FPS calculation).
    last_render: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime, entering raw mode and the alternate
    /// screen.
    pub fn new(state: AppState) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            last_tick: now,
            last_render: now,
        })
    }

    /// Runs the main event loop until the app quits.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Prepend Frame with the current terminal size so sizing and
            // layout happen before input and ticks this frame.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                // Only Tick triggers render - this caps frame rate at tick
                // cadence. Input updates state but batches to the next Tick.
                let marks_dirty = matches!(&event, UiEvent::Tick { .. });

                let effects = update::update(&mut self.state, event);
                if marks_dirty {
                    dirty = true;
                }
                self.execute_effects(effects);
            }

            if dirty {
                // Measure the actual frame interval for the FPS readout.
                let frame_ms = u16::try_from(self.last_render.elapsed().as_millis())
                    .unwrap_or(u16::MAX);
                self.last_render = Instant::now();

                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;

                dirty = false;
                self.state.status.on_frame(frame_ms);
            }
        }

        Ok(())
    }

    /// Collects terminal events and emits a Tick when one is due.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling only while reels are moving; a settled board only
        // needs to stay responsive to input and the page-dwell timer.
        let animating = !self.state.board.is_settled() && !self.state.paused;
        let tick_interval = if animating {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Block until the next tick is due; wake early on input.
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());

        if event::poll(time_until_tick)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick {
                dt: self.last_tick.elapsed(),
            });
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            match effect {
                UiEffect::Quit => {
                    tracing::info!("quit requested");
                    self.state.should_quit = true;
                }
            }
        }
    }
}
