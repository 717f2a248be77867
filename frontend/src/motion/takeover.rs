use super::math::clamp01;
use super::reduced::Motion;

/// `Idle -> Active` is the only edge; `Active` is terminal for the lifetime of
/// the scene, so scrolling back up keeps the overlay mounted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TakeoverPhase {
    Idle,
    Active { overlay_progress: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    None,
    Activated,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Takeover {
    threshold: f64,
    phase: TakeoverPhase,
}

impl Takeover {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: clamp01(threshold),
            phase: TakeoverPhase::Idle,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> TakeoverPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        matches!(self.phase, TakeoverPhase::Active { .. })
    }

    /// Overlay progress while active, `None` before activation.
    pub fn overlay_progress(&self) -> Option<f64> {
        match self.phase {
            TakeoverPhase::Idle => None,
            TakeoverPhase::Active { overlay_progress } => Some(overlay_progress),
        }
    }

    /// Feed the page-level progress of the section.
    pub fn observe(&mut self, page_progress: f64, motion: Motion) -> Transition {
        match self.phase {
            TakeoverPhase::Idle if !motion.is_reduced() && page_progress > self.threshold => {
                self.phase = TakeoverPhase::Active {
                    overlay_progress: 0.0,
                };
                Transition::Activated
            }
            _ => Transition::None,
        }
    }

    /// Feed the overlay's internal scroll progress. Ignored while idle.
    pub fn set_overlay_progress(&mut self, progress: f64) {
        if let TakeoverPhase::Active { overlay_progress } = &mut self.phase {
            *overlay_progress = clamp01(progress);
        }
    }
}
