use crate::config::Timing;
use crate::foundation::core::TimeMs;

/// Time-gated state of the whole animation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Phase {
    /// Flow-field wandering, `[0, intro)`.
    Dispersed,
    /// Seeking target points, `[intro, intro + form)`.
    Forming,
    /// At rest, `[intro + form, ∞)`.
    Formed,
}

impl Phase {
    /// Phase for a given elapsed time.
    pub fn at(elapsed_ms: f64, timing: &Timing) -> Self {
        if elapsed_ms < timing.intro_ms {
            Self::Dispersed
        } else if elapsed_ms < timing.intro_ms + timing.form_ms {
            Self::Forming
        } else {
            Self::Formed
        }
    }

    /// Ordinal: 0, 1 or 2.
    pub fn index(self) -> u8 {
        match self {
            Self::Dispersed => 0,
            Self::Forming => 1,
            Self::Formed => 2,
        }
    }
}

/// Elapsed-time clock for one animation run.
///
/// The observed phase never moves backwards, even if the host reports a timestamp earlier
/// than one already seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationClock {
    start_ms: TimeMs,
    phase: Phase,
}

impl AnimationClock {
    /// Clock started at `start_ms`, in the dispersed phase.
    pub fn new(start_ms: TimeMs) -> Self {
        Self {
            start_ms,
            phase: Phase::Dispersed,
        }
    }

    /// Restart at `start_ms` in the dispersed phase.
    pub fn reset(&mut self, start_ms: TimeMs) {
        *self = Self::new(start_ms);
    }

    /// Host time the run started at.
    pub fn start_ms(&self) -> TimeMs {
        self.start_ms
    }

    /// Last observed phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time since start, never negative.
    pub fn elapsed(&self, now_ms: TimeMs) -> f64 {
        (now_ms - self.start_ms).max(0.0)
    }

    /// Advance the phase to what `now_ms` implies and return it.
    pub fn observe(&mut self, now_ms: TimeMs, timing: &Timing) -> Phase {
        let phase = Phase::at(self.elapsed(now_ms), timing);
        if phase > self.phase {
            self.phase = phase;
        }
        self.phase
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/phase.rs"]
mod tests;
