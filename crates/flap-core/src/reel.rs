//! Per-cell reel controller.
//!
//! A reel is either Idle (displaying `current`) or Animating (stepping
//! toward a target one alphabet position per flip). The controller owns
//! the symbol bookkeeping only; progress is driven externally by the
//! cell's `StepClock`, one monotonic 0-100 sweep per step.

use crate::alphabet::Alphabet;
use crate::layout::BLANK;

/// Observable state of one reel, sampled by the renderer each frame.
///
/// Exclusively owned by its controller; nothing outside the owning cell's
/// scheduler ever mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReelState {
    /// Cell identity (flat grid index).
    pub id: usize,
    /// Symbol on the card currently at rest (or folding away mid-step).
    pub current: char,
    /// Symbol on the card arriving during the active step.
    pub next: char,
    /// Whether a step is in flight.
    pub animating: bool,
    /// Step progress, 0-100.
    pub progress: f32,
}

/// Outcome of committing a completed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Target reached; the reel returned to Idle.
    Settled,
    /// More flips needed; rest, then begin the next step.
    Continue,
}

/// The per-cell state machine stepping `current` toward a target.
#[derive(Debug, Clone)]
pub struct Reel {
    state: ReelState,
    target: Option<char>,
}

impl Reel {
    /// Creates an idle reel displaying `current`.
    pub fn new(id: usize, current: char) -> Self {
        Self {
            state: ReelState {
                id,
                current,
                next: current,
                animating: false,
                progress: 0.0,
            },
            target: None,
        }
    }

    pub fn state(&self) -> &ReelState {
        &self.state
    }

    pub fn target(&self) -> Option<char> {
        self.target
    }

    /// Gives the reel a symbol to reach.
    ///
    /// Returns true if this arms an animation. A blank target, or a target
    /// equal to the displayed symbol, leaves the reel Idle: the entry
    /// condition requires a non-blank target that differs from `current`.
    pub fn set_target(&mut self, target: char) -> bool {
        self.target = Some(target);
        target != BLANK && target != self.state.current
    }

    /// True when the reel has nothing left to reach.
    pub fn is_settled(&self) -> bool {
        !self.state.animating
            && match self.target {
                Some(target) => target == BLANK || target == self.state.current,
                None => true,
            }
    }

    /// Begins one flip: picks the next card in cycling order.
    ///
    /// A `current` not found in the alphabet steps to the first card (the
    /// index -1 rule), so the machine is total over arbitrary symbols.
    pub fn begin_step(&mut self, alphabet: &Alphabet) {
        self.state.next = alphabet.next_after(self.state.current);
        self.state.progress = 0.0;
        self.state.animating = true;
    }

    /// Externally driven progress update for the active step.
    pub fn set_progress(&mut self, progress: f32) {
        self.state.progress = progress.clamp(0.0, 100.0);
    }

    /// Commits the active step: the incoming card becomes current.
    ///
    /// Settles the reel if the target is now displayed; otherwise the
    /// caller rests and begins the next step.
    pub fn complete_step(&mut self) -> StepOutcome {
        self.state.current = self.state.next;
        self.state.progress = 0.0;

        let settled = match self.target {
            // A blank target never drives animation; whatever card is up
            // when the in-flight step commits is where the reel rests.
            Some(target) if target != BLANK => self.state.current == target,
            _ => true,
        };

        if settled {
            self.state.animating = false;
            StepOutcome::Settled
        } else {
            StepOutcome::Continue
        }
    }

    /// Manual single-step trigger for targetless reels.
    ///
    /// Advances exactly one alphabet position per invocation; a trigger
    /// arriving while a step is in flight is a debounced no-op.
    pub fn trigger_step(&mut self, alphabet: &Alphabet) -> bool {
        if self.state.animating {
            return false;
        }
        self.target = None;
        self.begin_step(alphabet);
        true
    }
}
