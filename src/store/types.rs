//! Core data types for the signup store
//!
//! This module defines `SignupRecord`, the single unit of persisted state:
//! one email address and the moment it joined the waitlist.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single waitlist signup
///
/// Records are immutable once created: the store only prepends new records
/// and bulk-clears. The email is the natural key within the stored list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRecord {
    /// Email address exactly as submitted
    pub email: String,
    /// Signup time, serialized as ISO-8601
    pub date: DateTime<Utc>,
}

impl SignupRecord {
    /// Create a record stamped with the current time
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            date: Utc::now(),
        }
    }

    /// Create a record with an explicit timestamp
    pub fn with_date(email: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            date,
        }
    }

    /// Local calendar date of the signup
    ///
    /// "Today" counts compare calendar dates in local time, not 24h windows.
    pub fn local_date(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }

    /// Local display form used in CSV exports (e.g. `2026-08-23 14:05:09`)
    pub fn display_date(&self) -> String {
        self.date
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }

    /// Abbreviated local form used in the admin panel list (e.g. `Aug 23, 14:05`)
    pub fn short_date(&self) -> String {
        self.date
            .with_timezone(&Local)
            .format("%b %-d, %H:%M")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_serialization_iso8601() {
        let date = Utc.with_ymd_and_hms(2026, 8, 23, 12, 30, 0).unwrap();
        let record = SignupRecord::with_date("user@example.com", date);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("user@example.com"));
        assert!(json.contains("2026-08-23T12:30:00Z"));

        let restored: SignupRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }

    #[test]
    fn test_local_date_matches_local_wall_clock() {
        // Build the instant from a local wall-clock time so the assertion
        // holds in any test-machine timezone.
        let local = Local
            .with_ymd_and_hms(2026, 3, 15, 23, 59, 0)
            .single()
            .unwrap();
        let record = SignupRecord::with_date("user@example.com", local.with_timezone(&Utc));

        assert_eq!(
            record.local_date(),
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_display_forms() {
        let local = Local
            .with_ymd_and_hms(2026, 8, 5, 9, 7, 3)
            .single()
            .unwrap();
        let record = SignupRecord::with_date("user@example.com", local.with_timezone(&Utc));

        assert_eq!(record.display_date(), "2026-08-05 09:07:03");
        assert_eq!(record.short_date(), "Aug 5, 09:07");
    }
}
