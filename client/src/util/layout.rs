//! Geometry and the section-measurement seam.
//!
//! DESIGN
//! ======
//! The highlighter never touches the DOM directly. It asks a `SectionLayout`
//! for each section's box, so the step-function logic runs the same against
//! live elements (`util::dom::DomLayout`) and a plain map in tests.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::state::section::SectionId;

/// Axis-aligned box in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Half-open vertical containment: `top <= y < bottom`.
    #[must_use]
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.top() && y < self.bottom()
    }

    /// Inclusive point containment, as used for hit-testing pointer events
    /// against a `getBoundingClientRect` box.
    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Capability for measuring page sections.
pub trait SectionLayout {
    /// Document-relative box of `id`, or `None` when the element is absent.
    fn bounding_box(&self, id: SectionId) -> Option<Rect>;
}

impl<S: BuildHasher> SectionLayout for HashMap<SectionId, Rect, S> {
    fn bounding_box(&self, id: SectionId) -> Option<Rect> {
        self.get(&id).copied()
    }
}
