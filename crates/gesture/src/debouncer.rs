//! Navigation cooldown
//!
//! After a move is accepted, further moves are refused until the cooldown
//! has elapsed. The lock is a deadline, so it expires by itself as time
//! passes; no reading has to arrive for the pager to become responsive again.

use chrono::{DateTime, Duration, Utc};
use tilt_core::{NavigationIntent, Timestamp};

/// Gate allowing at most one navigation per cooldown window
#[derive(Debug, Clone)]
pub struct NavigationDebouncer {
    cooldown: Duration,
    locked_until: Option<Timestamp>,
}

impl NavigationDebouncer {
    /// Create an unlocked debouncer
    ///
    /// A negative cooldown is treated as zero.
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown: cooldown.max(Duration::zero()),
            locked_until: None,
        }
    }

    /// Configured cooldown window
    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// True while a previous move is still cooling down at `now`
    pub fn is_locked(&self, now: Timestamp) -> bool {
        matches!(self.locked_until, Some(until) if now < until)
    }

    /// When the current lock expires, if one is held
    pub fn unlock_at(&self) -> Option<Timestamp> {
        self.locked_until
    }

    /// Try to let an intent through
    ///
    /// Returns `true` and starts a new cooldown when unlocked. Returns
    /// `false` without touching the lock otherwise. A cooldown reaching past
    /// the last representable time locks until that time.
    pub fn try_fire(&mut self, intent: NavigationIntent, now: Timestamp) -> bool {
        if self.is_locked(now) {
            log::debug!(
                "Dropping {}: locked for another {}ms",
                intent,
                self.remaining(now).num_milliseconds()
            );
            return false;
        }

        self.locked_until = Some(
            now.checked_add_signed(self.cooldown)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        );
        true
    }

    /// Clear an expired lock (the scheduled unlock). Returns whether a lock
    /// was released.
    pub fn release_expired(&mut self, now: Timestamp) -> bool {
        match self.locked_until {
            Some(until) if now >= until => {
                self.locked_until = None;
                true
            }
            _ => false,
        }
    }

    /// Time left on the current lock (zero when unlocked)
    pub fn remaining(&self, now: Timestamp) -> Duration {
        match self.locked_until {
            Some(until) if now < until => until - now,
            _ => Duration::zero(),
        }
    }

    /// Drop any lock (teardown)
    pub fn reset(&mut self) {
        self.locked_until = None;
    }
}
