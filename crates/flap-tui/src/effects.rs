//! UI effect types.
//!
//! Effects are commands returned by the reducer for the runtime to
//! execute. The reducer itself only mutates state; anything that touches
//! the outside world goes through an effect.

/// Effects returned by the reducer.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
}
