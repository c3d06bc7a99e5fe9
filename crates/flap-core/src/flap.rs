//! Pendulum easing and flap-frame sampling.
//!
//! A single flip is rendered as two half-card rotations: the outgoing
//! symbol's top half swings down over the first half of the step, then the
//! incoming symbol's bottom half swings down over the second half. This
//! module is the pure sampling side of that boundary: given
//! `(current, next, progress)` it produces angles and visibility flags.
//! It never mutates reel state and may be called at any frequency.

use std::f32::consts::PI;

/// Maximum card rotation in degrees.
///
/// Deliberately short of a full 90°: at exactly 90° the card is edge-on
/// and its projected height collapses to a singular line.
pub const MAX_FLAP_ANGLE: f32 = 88.0;

/// Progress value at which a step's visibility hands over from the
/// outgoing top half to the incoming bottom half.
pub const HANDOVER_PROGRESS: f32 = 50.0;

/// Pendulum deceleration curve: `sin²(πt/2)` over `[0, 1]`.
///
/// Monotonically increasing with `ease(0) = 0` and `ease(1) = 1`; the
/// derivative vanishes at both ends, which reads as a card swinging out
/// of rest and settling into place. Input is clamped to the unit
/// interval.
pub fn pendulum_ease(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let s = (PI * t / 2.0).sin();
    s * s
}

/// One frame of flap geometry for a single reel cell.
///
/// Four layers, back to front: a static top half already showing the
/// incoming symbol, the rotating outgoing top half, a static bottom half
/// still showing the outgoing symbol, and the rotating incoming bottom
/// half.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlapFrame {
    /// Symbol on the static background top half.
    pub top_background: char,
    /// Symbol on the static background bottom half.
    pub bottom_background: char,
    /// Symbol on the rotating top half (the outgoing card).
    pub rotating_top: char,
    /// Symbol on the rotating bottom half (the incoming card).
    pub rotating_bottom: char,
    /// Rotation of the outgoing top half, degrees (0 = flat, negative = folding down).
    pub top_angle: f32,
    /// Rotation of the incoming bottom half, degrees (0 = flat).
    pub bottom_angle: f32,
    /// Whether the rotating top half is drawn this frame.
    pub top_visible: bool,
    /// Whether the rotating bottom half is drawn this frame.
    pub bottom_visible: bool,
}

/// Samples the flap geometry for a step at `progress` (0-100).
///
/// For `progress <= 50` the outgoing top half folds down through
/// `ease(progress / 50) * -88°`; past 50 it is pinned fully folded and no
/// longer drawn. The incoming bottom half appears only after 50 and
/// unfolds through `88° - ease((progress - 50) / 50) * 88°`. Progress 50
/// is the single handover point between the two halves.
pub fn sample_flap(current: char, next: char, progress: f32) -> FlapFrame {
    let progress = progress.clamp(0.0, 100.0);

    let top_angle = if progress <= HANDOVER_PROGRESS {
        pendulum_ease(progress / HANDOVER_PROGRESS) * -MAX_FLAP_ANGLE
    } else {
        -MAX_FLAP_ANGLE
    };

    let bottom_angle = if progress > HANDOVER_PROGRESS {
        MAX_FLAP_ANGLE
            - pendulum_ease((progress - HANDOVER_PROGRESS) / HANDOVER_PROGRESS) * MAX_FLAP_ANGLE
    } else {
        MAX_FLAP_ANGLE
    };

    FlapFrame {
        // The background top reveals the incoming symbol as soon as the
        // outgoing card starts to fold away from it.
        top_background: if progress > 0.0 { next } else { current },
        bottom_background: current,
        rotating_top: current,
        rotating_bottom: next,
        top_angle,
        bottom_angle,
        top_visible: progress < HANDOVER_PROGRESS,
        bottom_visible: progress > HANDOVER_PROGRESS,
    }
}
