use crate::animation::FrameReport;
use crate::animation::phase::Phase;
use crate::foundation::core::TimeMs;

/// UI-side observer of the animation.
///
/// All methods default to no-ops.
pub trait LogoEvents {
    /// The observed phase changed.
    fn on_phase(&mut self, _phase: Phase, _now_ms: TimeMs) {}

    /// The formed phase was reached. Fires once per animation run.
    fn on_formed(&mut self, _now_ms: TimeMs) {}

    /// A frame finished drawing.
    fn on_frame(&mut self, _report: &FrameReport) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEvents;

impl LogoEvents for NoEvents {}

/// Visibility of the UI chrome revealed once the logo has formed.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct UiReveal {
    elements: Vec<(String, bool)>,
    formed_count: u32,
}

impl UiReveal {
    /// All `ids` start hidden.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: ids.into_iter().map(|id| (id.into(), false)).collect(),
            formed_count: 0,
        }
    }

    /// `None` for an unknown element id.
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        self.elements
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, visible)| *visible)
    }

    /// True once every element is visible.
    pub fn all_visible(&self) -> bool {
        self.elements.iter().all(|(_, visible)| *visible)
    }

    /// Ids of visible elements, in registration order.
    pub fn visible_ids(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .filter(|(_, visible)| *visible)
            .map(|(name, _)| name.as_str())
    }

    /// How many formed events were received.
    pub fn formed_count(&self) -> u32 {
        self.formed_count
    }

    /// Make every element visible.
    pub fn reveal(&mut self) {
        for (_, visible) in &mut self.elements {
            *visible = true;
        }
    }
}

impl LogoEvents for UiReveal {
    fn on_formed(&mut self, _now_ms: TimeMs) {
        self.formed_count += 1;
        self.reveal();
        tracing::debug!(elements = self.elements.len(), "ui revealed");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/events.rs"]
mod tests;
