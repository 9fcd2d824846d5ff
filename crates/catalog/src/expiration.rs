//! Expiration classification.
//!
//! Comparison is done on calendar days: the reference instant is truncated to
//! its date before subtracting. A product is expired for the whole of its
//! expiration day.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Default width of the near-expiration window, in days.
pub const DEFAULT_NEAR_WINDOW_DAYS: u32 = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpirationStatus {
    Expired,
    NearExpiration,
    Normal,
}

impl ExpirationStatus {
    /// Tooltip text shown next to the expiration date, if any.
    pub fn warning(self) -> Option<&'static str> {
        match self {
            ExpirationStatus::Expired => Some("This product has expired"),
            ExpirationStatus::NearExpiration => Some("This product is about to expire"),
            ExpirationStatus::Normal => None,
        }
    }

    pub fn needs_attention(self) -> bool {
        self != ExpirationStatus::Normal
    }
}

/// Classification thresholds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationPolicy {
    /// Products expiring within `1..=near_window_days` days are flagged.
    pub near_window_days: u32,
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        Self {
            near_window_days: DEFAULT_NEAR_WINDOW_DAYS,
        }
    }
}

impl ExpirationPolicy {
    pub fn new(near_window_days: u32) -> Self {
        Self { near_window_days }
    }

    pub fn classify(&self, expiration: NaiveDate, today: NaiveDate) -> ExpirationStatus {
        let days = days_until(expiration, today);
        if days <= 0 {
            ExpirationStatus::Expired
        } else if days <= i64::from(self.near_window_days) {
            ExpirationStatus::NearExpiration
        } else {
            ExpirationStatus::Normal
        }
    }

    /// Classify against a wall-clock reading, truncated to its calendar day.
    pub fn classify_at(&self, expiration: NaiveDate, now: NaiveDateTime) -> ExpirationStatus {
        self.classify(expiration, now.date())
    }
}

/// Whole days from `today` to `expiration` (zero on the expiration day).
pub fn days_until(expiration: NaiveDate, today: NaiveDate) -> i64 {
    expiration.signed_duration_since(today).num_days()
}

/// Classify with the default five-day window.
pub fn classify(expiration: NaiveDate, today: NaiveDate) -> ExpirationStatus {
    ExpirationPolicy::default().classify(expiration, today)
}
