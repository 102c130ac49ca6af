//! One-shot entrance-animation gate for a page section.
//!
//! The controller only decides *whether* a section is revealed. Components map
//! the flag to CSS classes; `util::observer` feeds it intersection entries.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::state::section::SectionId;

/// Intersection ratios come back from the browser with float rounding, so a
/// section sitting exactly at its threshold can report a hair below it.
pub const RATIO_TOLERANCE: f64 = 1e-3;

/// Threshold used by the About section.
pub const ABOUT_THRESHOLD: f64 = 0.2;

/// Threshold used by every other observed section.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Footer entrance threshold.
pub const FOOTER_THRESHOLD: f64 = 0.1;

/// Ratio step between observer thresholds below a section's own threshold.
pub const THRESHOLD_STEP: f64 = 0.02;

/// One intersection-observer report for the watched element.
///
/// `ratio` is the visible share of the element. `coverage` is the share of
/// the viewport the element fills; a section taller than `1 / threshold`
/// viewports can only ever reach its threshold through coverage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Observation {
    pub intersecting: bool,
    pub ratio: f64,
    pub coverage: f64,
}

/// Result of feeding an observation to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTransition {
    /// This observation flipped the gate; stop observing.
    Revealed,
    /// Nothing changed.
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    revealed: bool,
    threshold: f64,
}

impl RevealState {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { revealed: false, threshold: threshold.clamp(0.0, 1.0) }
    }

    /// Controller for a section, using its configured threshold.
    #[must_use]
    pub fn for_section(id: SectionId) -> Self {
        Self::new(section_threshold(id))
    }

    #[must_use]
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Apply one observation. Only the first qualifying one has any effect.
    pub fn observe(&mut self, observation: Observation) -> RevealTransition {
        if self.revealed {
            return RevealTransition::Unchanged;
        }
        let reached = |share: f64| share + RATIO_TOLERANCE >= self.threshold;
        if observation.intersecting && (reached(observation.ratio) || reached(observation.coverage)) {
            self.revealed = true;
            RevealTransition::Revealed
        } else {
            RevealTransition::Unchanged
        }
    }

    /// Reveal without an observation (used by the hero on mount).
    pub fn reveal_now(&mut self) -> RevealTransition {
        if self.revealed {
            RevealTransition::Unchanged
        } else {
            self.revealed = true;
            RevealTransition::Revealed
        }
    }
}

/// Observer thresholds: steps of `THRESHOLD_STEP` up to `threshold`, then
/// `threshold` itself. The steps keep callbacks coming while a tall section's
/// coverage grows even though its ratio stays small.
#[must_use]
pub fn observer_thresholds(threshold: f64) -> Vec<f64> {
    let threshold = threshold.clamp(0.0, 1.0);
    let mut steps: Vec<f64> = (0_u32..)
        .map(|i| f64::from(i) * THRESHOLD_STEP)
        .take_while(|t| *t < threshold)
        .collect();
    steps.push(threshold);
    steps
}

#[must_use]
pub fn section_threshold(id: SectionId) -> f64 {
    match id {
        SectionId::About => ABOUT_THRESHOLD,
        _ => DEFAULT_THRESHOLD,
    }
}

/// Per-item entrance delay for staggered card grids.
#[must_use]
pub fn stagger_style(base_ms: u32, step_ms: u32, index: usize) -> String {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    format!("transition-delay:{}ms", base_ms.saturating_add(step_ms.saturating_mul(index)))
}

/// `base` plus the hidden/visible animation modifier.
#[must_use]
pub fn reveal_class(base: &str, revealed: bool) -> String {
    if revealed {
        format!("{base} reveal reveal--visible")
    } else {
        format!("{base} reveal")
    }
}
