//! UI event types.
//!
//! Events are inputs to the reducer. The runtime collects them each frame
//! and processes them in order; `Frame` is always prepended so sizing
//! happens before anything else reads the grid.

use std::time::Duration;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Start-of-frame notification with the current terminal size.
    Frame { width: u16, height: u16 },
    /// Animation tick carrying the measured time since the last tick.
    Tick { dt: Duration },
    /// Raw terminal input (keys, resize).
    Terminal(crossterm::event::Event),
}
