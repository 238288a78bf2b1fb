use crate::geometry::Geometry;
use crate::types::{Boundary, Correction};

/// Default time a correction suppresses further corrections.
pub const DEFAULT_COOLDOWN_MS: u64 = 150;

/// Organic forward wraps land here instead of 0: a true 0 would itself read as a backward
/// boundary crossing on the next scroll event.
pub const ORGANIC_FORWARD_RESET: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectionPhase {
    #[default]
    Idle,
    /// A correction just fired; boundary evaluation is suppressed until `until_ms`.
    ///
    /// The deadline is not renewable: crossings inside the window are dropped, not deferred.
    Cooldown { until_ms: u64 },
}

/// Wrap-around state machine.
///
/// Distinguishes organic scrolling (drag, swipe momentum, scrollbar) from programmatic
/// navigation (a button or handle call whose animated scroll is in flight), since each needs a
/// different correction target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CorrectionMachine {
    phase: CorrectionPhase,
    navigation_pending: bool,
}

impl CorrectionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CorrectionPhase {
        self.phase
    }

    pub fn navigation_pending(&self) -> bool {
        self.navigation_pending
    }

    pub fn is_cooling_down(&self, now_ms: u64) -> bool {
        matches!(self.phase, CorrectionPhase::Cooldown { until_ms } if now_ms < until_ms)
    }

    /// Marks the next boundary crossing as caused by navigation.
    pub fn arm_navigation(&mut self) {
        self.navigation_pending = true;
    }

    /// Clears the navigation flag without a correction, e.g. when the animated scroll it
    /// belonged to settled or was interrupted before reaching a boundary.
    pub fn disarm_navigation(&mut self) {
        self.navigation_pending = false;
    }

    /// Returns to `Idle` once the cooldown deadline has passed. Returns `true` if it did.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        match self.phase {
            CorrectionPhase::Cooldown { until_ms } if now_ms >= until_ms => {
                self.phase = CorrectionPhase::Idle;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending cooldown and navigation flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn restore(&mut self, phase: CorrectionPhase, navigation_pending: bool) {
        self.phase = phase;
        self.navigation_pending = navigation_pending;
    }

    /// Evaluates one scroll event at `offset`.
    ///
    /// Returns the correction the host must apply, or `None` while cooling down or when the
    /// offset is clear of both boundaries.
    pub fn evaluate(
        &mut self,
        offset: f64,
        geometry: &Geometry,
        now_ms: u64,
        cooldown_ms: u64,
    ) -> Option<Correction> {
        if self.is_cooling_down(now_ms) {
            ctrace!(offset, now_ms, "CorrectionMachine: suppressed (cooldown)");
            return None;
        }
        self.expire(now_ms);

        let boundary = if offset + geometry.clone_region_width >= geometry.scroll_width {
            Boundary::Forward
        } else if offset <= 0.0 {
            Boundary::Backward
        } else {
            return None;
        };

        let correction = match (boundary, self.navigation_pending) {
            (Boundary::Forward, true) => Correction {
                boundary,
                jump_to: 0.0,
                animate_to: Some((geometry.stride() - geometry.centering_offset).max(0.0)),
            },
            (Boundary::Forward, false) => Correction {
                boundary,
                jump_to: ORGANIC_FORWARD_RESET,
                animate_to: None,
            },
            (Boundary::Backward, true) => Correction {
                boundary,
                jump_to: geometry.content_width,
                animate_to: Some(geometry.initial_offset()),
            },
            (Boundary::Backward, false) => Correction {
                boundary,
                jump_to: geometry.forward_boundary().max(0.0),
                animate_to: None,
            },
        };

        self.navigation_pending = false;
        self.phase = CorrectionPhase::Cooldown {
            until_ms: now_ms.saturating_add(cooldown_ms),
        };
        cdebug!(
            offset,
            now_ms,
            forward = matches!(boundary, Boundary::Forward),
            jump_to = correction.jump_to,
            programmatic = correction.is_programmatic(),
            "CorrectionMachine: wrap"
        );
        Some(correction)
    }
}
