// ABOUTME: Body metric models for weight history tracking
// ABOUTME: Append-only weight entries with timestamps and optional notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One body weight measurement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BodyWeightEntry {
    /// Unique identifier
    pub id: Uuid,
    /// When the measurement was taken
    pub recorded_at: DateTime<Utc>,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Optional free-form note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl BodyWeightEntry {
    /// Create a weight entry recorded now
    #[must_use]
    pub fn new(weight_kg: f64, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            weight_kg,
            note,
        }
    }
}

/// Latest measurement in a weight log, by recording time
#[must_use]
pub fn latest(log: &[BodyWeightEntry]) -> Option<&BodyWeightEntry> {
    log.iter().max_by_key(|entry| entry.recorded_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_latest_picks_most_recent_by_time() {
        let mut older = BodyWeightEntry::new(81.0, None);
        older.recorded_at = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let mut newer = BodyWeightEntry::new(80.2, Some("morning".into()));
        newer.recorded_at = Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap();

        // Order in the log does not matter
        let log = vec![newer.clone(), older];
        assert_eq!(latest(&log), Some(&newer));
    }

    #[test]
    fn test_latest_on_empty_log() {
        assert_eq!(latest(&[]), None);
    }
}
