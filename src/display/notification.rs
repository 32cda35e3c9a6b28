//! Transient notification
//!
//! A message with a lifetime. Nothing is scheduled: whoever renders checks
//! whether the message has expired yet.

use std::time::{Duration, Instant};

/// Message shown after an item is added
pub const ADDED_MESSAGE: &str = "Added to list!";

/// A self-expiring message
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self::posted_at(message, duration, Instant::now())
    }

    pub fn posted_at(message: impl Into<String>, duration: Duration, created_at: Instant) -> Self {
        Self {
            message: message.into(),
            created_at,
            duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// The message, if still visible at `now`
    pub fn visible_at(&self, now: Instant) -> Option<&str> {
        if self.is_expired_at(now) {
            None
        } else {
            Some(&self.message)
        }
    }
}
