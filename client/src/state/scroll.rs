//! Scroll-driven navigation highlighting.
//!
//! DESIGN
//! ======
//! `ScrollState` is the single page-wide scroll snapshot. The navbar owns the
//! scroll/resize subscription and feeds offsets in; everything else reads a
//! copy. The active-section mapping is a step function over the probe offset
//! (`y + PROBE_LOOKAHEAD_PX`): the first section, in page order, whose
//! half-open vertical span contains the probe wins.
//!
//! When the probe falls outside every section (above the first or past the
//! last), the previous active section is kept rather than cleared.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::section::SectionId;
use crate::util::layout::SectionLayout;

/// Offset past which the navbar switches to its solid background.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Lookahead added to the scroll offset before section matching.
pub const PROBE_LOOKAHEAD_PX: f64 = 100.0;

/// Hero background moves at this fraction of the scroll offset.
pub const PARALLAX_FACTOR: f64 = 0.4;

/// Page-wide scroll snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub offset: f64,
    pub is_scrolled: bool,
    pub active: Option<SectionId>,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self { offset: 0.0, is_scrolled: false, active: Some(SectionId::Home) }
    }
}

impl ScrollState {
    /// Recompute everything derived from `offset`. Idempotent for a given
    /// offset and layout.
    pub fn on_scroll<L: SectionLayout + ?Sized>(&mut self, offset: f64, layout: &L) {
        self.offset = offset;
        self.is_scrolled = is_scrolled(offset);
        if let Some(id) = section_at(probe_offset(offset), &SectionId::ALL, layout) {
            if self.active != Some(id) {
                log::debug!("active section {id}");
            }
            self.active = Some(id);
        }
    }

    /// Navigation click: highlight `id` now, ahead of the scroll that follows.
    pub fn select(&mut self, id: SectionId) {
        self.active = Some(id);
    }

    #[must_use]
    pub fn is_active(&self, id: SectionId) -> bool {
        self.active == Some(id)
    }

    /// Hero background translation in pixels.
    #[must_use]
    pub fn parallax_offset(&self) -> f64 {
        self.offset * PARALLAX_FACTOR
    }
}

#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD_PX
}

#[must_use]
pub fn probe_offset(offset: f64) -> f64 {
    offset + PROBE_LOOKAHEAD_PX
}

/// First section in `order` whose `[top, bottom)` contains `probe`.
/// Sections the layout cannot measure are skipped.
pub fn section_at<L: SectionLayout + ?Sized>(probe: f64, order: &[SectionId], layout: &L) -> Option<SectionId> {
    order
        .iter()
        .copied()
        .find(|&id| layout.bounding_box(id).is_some_and(|rect| rect.contains_y(probe)))
}
