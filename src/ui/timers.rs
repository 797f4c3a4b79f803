//! Cancellable one-shot timers owned by a component
//!
//! Each callback scheduled through a [`TimerSet`] waits on a spawned
//! `TimeoutFuture`. Clearing the set, or disposing of the component that
//! created it, moves the set to a new epoch; callbacks from an older epoch
//! are skipped when their timeout fires. Nothing is retained per timer after
//! it fires.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct TimerSet {
    epoch: StoredValue<u64>,
}

impl TimerSet {
    /// Create a timer set tied to the current reactive owner.
    pub fn new() -> Self {
        Self {
            epoch: StoredValue::new(0),
        }
    }

    /// Run `callback` once after `delay_ms`, unless the set is cleared or
    /// disposed first.
    pub fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;

            let this = *self;
            let ticket = this.ticket();
            leptos::task::spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;
                if this.is_live(ticket) {
                    callback();
                }
            });
        }

        #[cfg(feature = "ssr")]
        {
            let _ = (delay_ms, callback);
        }
    }

    /// Cancel every pending timer.
    pub fn clear(&self) {
        self.epoch.try_update_value(|e| *e += 1);
    }

    #[cfg(any(not(feature = "ssr"), test))]
    fn ticket(&self) -> u64 {
        self.epoch.try_get_value().unwrap_or_default()
    }

    /// A timer scheduled with `ticket` may still run.
    #[cfg(any(not(feature = "ssr"), test))]
    fn is_live(&self, ticket: u64) -> bool {
        self.epoch.try_get_value() == Some(ticket)
    }
}

impl Default for TimerSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_cancels_pending_timers() {
        let owner = Owner::new();
        owner.with(|| {
            let timers = TimerSet::new();
            let first = timers.ticket();
            assert!(timers.is_live(first));

            timers.clear();
            assert!(!timers.is_live(first));

            // Timers scheduled after a clear run normally
            let second = timers.ticket();
            assert!(timers.is_live(second));
        });
    }

    #[test]
    fn test_disposed_owner_cancels_pending_timers() {
        let owner = Owner::new();
        let (timers, ticket) = owner.with(|| {
            let timers = TimerSet::new();
            (timers, timers.ticket())
        });
        assert!(timers.is_live(ticket));

        owner.cleanup();
        assert!(!timers.is_live(ticket));
    }
}
