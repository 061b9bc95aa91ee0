//! Three-phase animation state machine.
//!
//! Per-frame order inside [`AnimationController::tick`]:
//! 1. tint the background (motion trails),
//! 2. advance the global noise offset,
//! 3. observe the phase and fire the one-shot formed signal,
//! 4. for each particle: start its fade when formed, update, then draw.

pub(crate) mod controller;
pub(crate) mod events;
pub(crate) mod phase;

pub use controller::AnimationController;
pub use events::{LogoEvents, NoEvents, UiReveal};
pub use phase::{AnimationClock, Phase};

use crate::foundation::core::TimeMs;

/// Summary of one [`AnimationController::tick`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FrameReport {
    /// Host time of the frame.
    pub now_ms: TimeMs,
    /// Time since the run started, never negative.
    pub elapsed_ms: f64,
    /// Phase after observing this frame.
    pub phase: Phase,
    /// The formed signal fired on this frame.
    pub formed_now: bool,
    /// Nothing was drawn or updated (zero-size surface).
    pub skipped: bool,
    /// Particles drawn this frame.
    pub drawn: usize,
    /// Particles whose fade has started.
    pub fading: usize,
    /// Particles fully faded and moved off-surface.
    pub parked: usize,
}

impl FrameReport {
    pub(crate) fn skipped(now_ms: TimeMs, phase: Phase) -> Self {
        Self {
            now_ms,
            elapsed_ms: 0.0,
            phase,
            formed_now: false,
            skipped: true,
            drawn: 0,
            fading: 0,
            parked: 0,
        }
    }
}
