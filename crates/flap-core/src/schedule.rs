//! Per-reel step scheduling.
//!
//! Each cell owns one `StepClock`: an independent, frame-driven timeline
//! that sweeps the reel's progress 0-100 over the step duration, inserts
//! the inter-step rest, and applies the randomized start jitter. Clocks
//! never coordinate with each other, which is what makes a board of reels
//! cascade instead of lock-stepping. Dropping the cell drops its clock,
//! so no scheduled work can outlive the reel it drives.

use std::time::Duration;

use rand::Rng;

use crate::alphabet::Alphabet;
use crate::reel::{Reel, StepOutcome};

/// Timing profile for a board's reels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipTiming {
    /// Duration of one flip (progress 0 to 100).
    pub step: Duration,
    /// Rest between consecutive flips of the same reel.
    pub rest: Duration,
    /// Upper bound for the randomized start delay.
    pub jitter_max: Duration,
}

impl Default for FlipTiming {
    fn default() -> Self {
        Self {
            step: Duration::from_millis(250),
            rest: Duration::from_millis(75),
            jitter_max: Duration::from_millis(1200),
        }
    }
}

impl FlipTiming {
    /// Profile with no start jitter; every reel begins immediately.
    pub fn without_jitter(self) -> Self {
        Self {
            jitter_max: Duration::ZERO,
            ..self
        }
    }
}

/// Draws a start delay uniformly from `[0, max]`.
pub fn start_jitter(max: Duration) -> Duration {
    if max.is_zero() {
        return Duration::ZERO;
    }
    max.mul_f32(rand::rng().random_range(0.0..=1.0))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing scheduled; the reel is at rest.
    Idle,
    /// Waiting out the start delay before the first flip.
    Jitter { remaining: Duration },
    /// A flip is in flight; progress follows `elapsed / step`.
    Stepping { elapsed: Duration },
    /// Between flips of a multi-step run.
    Resting { remaining: Duration },
}

/// Frame-driven timeline for one reel.
#[derive(Debug, Clone)]
pub struct StepClock {
    timing: FlipTiming,
    phase: Phase,
}

impl StepClock {
    pub fn new(timing: FlipTiming) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
        }
    }

    /// Schedules the reel's run, delayed by `jitter`.
    ///
    /// With zero jitter the first flip begins on the next tick.
    pub fn arm(&mut self, jitter: Duration) {
        self.phase = Phase::Jitter { remaining: jitter };
    }

    /// Cancels anything scheduled and returns the clock to Idle.
    pub fn clear(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Starts driving a manually triggered single step.
    ///
    /// Debounced by the reel itself: while a step is in flight the trigger
    /// is a no-op and the clock is untouched.
    pub fn trigger_manual(&mut self, reel: &mut Reel, alphabet: &Alphabet) -> bool {
        if !reel.trigger_step(alphabet) {
            return false;
        }
        self.phase = Phase::Stepping {
            elapsed: Duration::ZERO,
        };
        true
    }

    /// Advances the timeline by `dt`, driving the reel through jitter,
    /// flips, and rests.
    ///
    /// A large `dt` is consumed across phase boundaries so step sequencing
    /// stays strict: a flip can never begin before the previous flip hit
    /// 100 and the rest elapsed.
    pub fn tick(&mut self, mut dt: Duration, reel: &mut Reel, alphabet: &Alphabet) {
        // Catch-up bound: at most one full deck of flips per tick. A
        // zero-duration step chasing a symbol missing from the alphabet
        // consumes no dt and would otherwise loop forever.
        let mut flips = 0usize;
        loop {
            match self.phase {
                Phase::Idle => return,
                Phase::Jitter { remaining } => {
                    if dt < remaining {
                        self.phase = Phase::Jitter {
                            remaining: remaining - dt,
                        };
                        return;
                    }
                    dt -= remaining;
                    if reel.is_settled() {
                        // Target already displayed (or blank); nothing to run.
                        self.phase = Phase::Idle;
                        return;
                    }
                    reel.begin_step(alphabet);
                    self.phase = Phase::Stepping {
                        elapsed: Duration::ZERO,
                    };
                }
                Phase::Stepping { elapsed } => {
                    let elapsed = elapsed + dt;
                    if elapsed < self.timing.step {
                        let fraction = elapsed.as_secs_f32() / self.timing.step.as_secs_f32();
                        reel.set_progress(fraction * 100.0);
                        self.phase = Phase::Stepping { elapsed };
                        return;
                    }
                    dt = elapsed - self.timing.step;
                    reel.set_progress(100.0);
                    match reel.complete_step() {
                        StepOutcome::Settled => {
                            self.phase = Phase::Idle;
                            return;
                        }
                        StepOutcome::Continue => {
                            self.phase = Phase::Resting {
                                remaining: self.timing.rest,
                            };
                            flips += 1;
                            if flips >= alphabet.len() {
                                return;
                            }
                        }
                    }
                }
                Phase::Resting { remaining } => {
                    if dt < remaining {
                        self.phase = Phase::Resting {
                            remaining: remaining - dt,
                        };
                        return;
                    }
                    dt -= remaining;
                    reel.begin_step(alphabet);
                    self.phase = Phase::Stepping {
                        elapsed: Duration::ZERO,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Alphabet {
        Alphabet::from_symbols(" ABC".chars()).expect("non-empty")
    }

    fn timing() -> FlipTiming {
        FlipTiming {
            step: Duration::from_millis(200),
            rest: Duration::from_millis(50),
            jitter_max: Duration::ZERO,
        }
    }

    #[test]
    fn test_progress_follows_step_duration() {
        let alphabet = abc();
        let mut reel = Reel::new(0, ' ');
        reel.set_target('B');
        let mut clock = StepClock::new(timing());
        clock.arm(Duration::ZERO);

        clock.tick(Duration::from_millis(100), &mut reel, &alphabet);
        assert!(reel.state().animating);
        assert!((reel.state().progress - 50.0).abs() < 1.0);

        clock.tick(Duration::from_millis(100), &mut reel, &alphabet);
        // First flip committed: ' ' -> 'A', now resting.
        assert_eq!(reel.state().current, 'A');
    }

    #[test]
    fn test_rest_separates_steps() {
        let alphabet = abc();
        let mut reel = Reel::new(0, ' ');
        reel.set_target('B');
        let mut clock = StepClock::new(timing());
        clock.arm(Duration::ZERO);

        // Exactly one step's worth: committed, but resting before step two.
        clock.tick(Duration::from_millis(200), &mut reel, &alphabet);
        assert_eq!(reel.state().current, 'A');

        // Rest not yet elapsed: no new step begins.
        clock.tick(Duration::from_millis(25), &mut reel, &alphabet);
        assert_eq!(reel.state().current, 'A');
        assert_eq!(reel.state().progress, 0.0);

        // Rest over: second flip runs to completion and settles.
        clock.tick(Duration::from_millis(250), &mut reel, &alphabet);
        assert_eq!(reel.state().current, 'B');
        assert!(reel.is_settled());
        assert!(clock.is_idle());
    }

    #[test]
    fn test_large_dt_preserves_sequencing() {
        let alphabet = abc();
        let mut reel = Reel::new(0, ' ');
        reel.set_target('C');
        let mut clock = StepClock::new(timing());
        clock.arm(Duration::ZERO);

        // One huge frame covers jitter + 3 steps + 2 rests.
        clock.tick(Duration::from_secs(5), &mut reel, &alphabet);
        assert_eq!(reel.state().current, 'C');
        assert!(reel.is_settled());
    }

    #[test]
    fn test_zero_duration_profile_with_absent_symbol_returns() {
        let alphabet = abc();
        let mut reel = Reel::new(0, ' ');
        // 'Z' is not in the deck: the reel cycles endlessly.
        reel.set_target('Z');
        let mut clock = StepClock::new(FlipTiming {
            step: Duration::ZERO,
            rest: Duration::ZERO,
            jitter_max: Duration::ZERO,
        });
        clock.arm(Duration::ZERO);

        // Instant flips consume no dt; each tick must still return after
        // one full deck instead of spinning.
        clock.tick(Duration::from_millis(16), &mut reel, &alphabet);
        assert!(reel.state().animating);
        assert!(!clock.is_idle());

        // The cycle keeps running on later ticks.
        clock.tick(Duration::from_millis(16), &mut reel, &alphabet);
        assert!(reel.state().animating);
    }

    #[test]
    fn test_jitter_delays_first_step() {
        let alphabet = abc();
        let mut reel = Reel::new(0, ' ');
        reel.set_target('A');
        let mut clock = StepClock::new(timing());
        clock.arm(Duration::from_millis(500));

        clock.tick(Duration::from_millis(499), &mut reel, &alphabet);
        assert!(!reel.state().animating);

        clock.tick(Duration::from_millis(1), &mut reel, &alphabet);
        assert!(reel.state().animating);
    }

    #[test]
    fn test_armed_but_settled_reel_goes_idle() {
        let alphabet = abc();
        let mut reel = Reel::new(0, 'A');
        reel.set_target('A');
        let mut clock = StepClock::new(timing());
        clock.arm(Duration::ZERO);

        clock.tick(Duration::from_millis(16), &mut reel, &alphabet);
        assert!(clock.is_idle());
        assert!(!reel.state().animating);
    }

    #[test]
    fn test_clear_cancels_pending_run() {
        let alphabet = abc();
        let mut reel = Reel::new(0, ' ');
        reel.set_target('C');
        let mut clock = StepClock::new(timing());
        clock.arm(Duration::from_millis(300));
        clock.clear();

        clock.tick(Duration::from_secs(10), &mut reel, &alphabet);
        assert_eq!(reel.state().current, ' ');
        assert!(clock.is_idle());
    }

    #[test]
    fn test_manual_trigger_runs_one_step() {
        let alphabet = abc();
        let mut reel = Reel::new(0, ' ');
        let mut clock = StepClock::new(timing());

        assert!(clock.trigger_manual(&mut reel, &alphabet));
        // Debounced while in flight.
        assert!(!clock.trigger_manual(&mut reel, &alphabet));

        clock.tick(Duration::from_millis(200), &mut reel, &alphabet);
        assert_eq!(reel.state().current, 'A');
        assert!(clock.is_idle());
    }

    #[test]
    fn test_start_jitter_bounded() {
        let max = Duration::from_millis(800);
        for _ in 0..64 {
            assert!(start_jitter(max) <= max);
        }
        assert_eq!(start_jitter(Duration::ZERO), Duration::ZERO);
    }
}
