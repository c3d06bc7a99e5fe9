//! Core split-flap board engine: alphabet, layout, reel state machines,
//! per-reel step scheduling, and the pendulum easing used by renderers.
//!
//! Everything in this crate is frame-driven and single-threaded: the host
//! calls `Board::tick(dt)` once per frame, and each reel advances its own
//! independent timeline. There is no I/O here except config loading.

pub mod alphabet;
pub mod board;
pub mod config;
pub mod flap;
pub mod layout;
pub mod reel;
pub mod schedule;

pub use alphabet::{Alphabet, AlphabetVariant};
pub use board::Board;
pub use config::{Config, Page};
pub use flap::{FlapFrame, MAX_FLAP_ANGLE, pendulum_ease, sample_flap};
pub use layout::{BLANK, GridConfig, RowContent, TextPlacement, apply_layout, create_layout};
pub use reel::{Reel, ReelState};
pub use schedule::{FlipTiming, StepClock};
