//! Single-slot deferred callback.
//!
//! Holding a `gloo_timers` `Timeout` keeps it armed; dropping it cancels. A
//! `TimerSlot` keeps at most one, so rescheduling replaces the pending
//! callback and `cancel` (called from `on_cleanup`) guarantees nothing fires
//! against a disposed component. Server rendering never schedules anything.
//!
//! Native tests only see the server build, so they cover the no-op path. The
//! replace/cancel semantics the slot exists for are mirrored by the tickets
//! in `state::menu` and `state::contact`: a rescheduled close or reset hands
//! out a new ticket and the superseded one is refused. Those transitions are
//! tested there.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::time::Duration;

#[derive(Default)]
pub struct TimerSlot {
    #[cfg(feature = "hydrate")]
    pending: Option<gloo_timers::callback::Timeout>,
}

impl TimerSlot {
    /// Arm `callback` to run once after `delay`, cancelling any pending one.
    pub fn schedule<F>(&mut self, delay: Duration, callback: F)
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            self.pending = Some(gloo_timers::callback::Timeout::new(millis, callback));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay, callback);
        }
    }

    pub fn cancel(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            drop(self.pending.take());
        }
    }
}
