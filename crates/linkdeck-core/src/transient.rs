//! Short-lived UI values that expire on their own (copy indicator, notice
//! banners).
//!
//! Expiry is a deadline on the tokio clock rather than a detached timer, so
//! whoever owns the value decides when to wait for it and dropping the
//! owner cancels it.

use std::time::Duration;

use tokio::time::Instant;

/// How long the "copied" indicator stays on a card
pub const COPIED_INDICATOR_TTL: Duration = Duration::from_millis(2000);

/// How long a non-URL scan notice stays visible
pub const SCAN_NOTICE_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone)]
pub struct Transient<T> {
    ttl: Duration,
    slot: Option<(T, Instant)>,
}

impl<T> Transient<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, slot: None }
    }

    /// Show `value`, restarting the countdown if something was already shown
    pub fn set(&mut self, value: T) {
        self.slot = Some((value, Instant::now() + self.ttl));
    }

    /// Current value, or None once the deadline has passed
    pub fn get(&self) -> Option<&T> {
        match &self.slot {
            Some((value, deadline)) if Instant::now() < *deadline => Some(value),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.get().is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.slot.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Drop the value if it has expired; returns true when something was dropped
    pub fn clear_expired(&mut self) -> bool {
        match &self.slot {
            Some((_, deadline)) if Instant::now() >= *deadline => {
                self.slot = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}

/// Wait until `deadline`, or forever when there is none.
///
/// Used as a `tokio::select!` branch next to event sources.
pub async fn sleep_until_or_pending(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
