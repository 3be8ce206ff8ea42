// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timestamp formatting for the snapshot header, greeting and footer.
//!
//! A run captures the current instant once and formats it here, so the
//! assembler itself is a pure function of its inputs.

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};

/// The operator's local zone as a fixed offset plus a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalZone {
    /// Whole hours ahead of UTC (negative for west).
    pub offset_hours: i32,
    pub label: String,
}

impl Default for LocalZone {
    fn default() -> Self {
        LocalZone {
            offset_hours: 0,
            label: "UTC".to_string(),
        }
    }
}

impl LocalZone {
    pub fn new(offset_hours: i32, label: impl Into<String>) -> Self {
        LocalZone {
            offset_hours,
            label: label.into(),
        }
    }

    /// The offset, or UTC if `offset_hours` is outside a day.
    pub fn offset(&self) -> FixedOffset {
        self.offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                tracing::warn!("timezone offset {}h out of range, using UTC", self.offset_hours);
                Utc.fix()
            })
    }

    /// Calendar date at `now` in this zone.
    pub fn date(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset()).date_naive()
    }
}

/// The formatted timestamps of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Timestamps {
    /// e.g. `2026-10-18 09:05 UTC`
    pub utc: String,
    /// e.g. `Sun 18 Oct 2026, 08:05 PM AEDT`
    pub local: String,
}

impl Timestamps {
    pub fn capture(now: DateTime<Utc>, zone: &LocalZone) -> Self {
        let local = now.with_timezone(&zone.offset());
        Timestamps {
            utc: now.format("%Y-%m-%d %H:%M UTC").to_string(),
            local: format!("{} {}", local.format("%a %d %b %Y, %I:%M %p"), zone.label),
        }
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
