//! Collapsible mobile navigation menu.
//!
//! DESIGN
//! ======
//! Two states, `open` and `closed`. Deferred closes are ticketed: the timer
//! that fires later hands its ticket back, and anything that changed the
//! state in between (a toggle, a newer selection) makes the ticket stale.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::time::Duration;

use crate::util::layout::Rect;

/// Delay between a menu selection and the menu closing, so the smooth scroll
/// starts before the panel collapses.
pub const MENU_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Identifies one scheduled close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseTicket(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenuState {
    pub open: bool,
    seq: u64,
}

impl MobileMenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.seq += 1;
        log::debug!("mobile menu {}", if self.open { "opened" } else { "closed" });
    }

    /// A navigation entry was chosen. Returns the ticket for the deferred
    /// close when the menu is open.
    pub fn select(&mut self) -> Option<CloseTicket> {
        if !self.open {
            return None;
        }
        self.seq += 1;
        Some(CloseTicket(self.seq))
    }

    /// Deferred close. Returns whether the menu actually closed.
    pub fn close_if_current(&mut self, ticket: CloseTicket) -> bool {
        if !self.open || ticket.0 != self.seq {
            return false;
        }
        self.close();
        true
    }

    /// Pointer-down / touch-start at `(x, y)`. `region` is the menu's current
    /// bounding box, `None` when it is not rendered. Returns whether the menu
    /// closed.
    pub fn pointer_down(&mut self, x: f64, y: f64, region: Option<Rect>) -> bool {
        if !self.open {
            return false;
        }
        let inside = region.is_some_and(|r| r.contains_point(x, y));
        if inside {
            return false;
        }
        self.close();
        true
    }

    fn close(&mut self) {
        self.open = false;
        self.seq += 1;
        log::debug!("mobile menu closed");
    }
}
