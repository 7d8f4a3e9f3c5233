//! Test data factories for creating valid test fixtures.
//!
//! Use the closure parameter to override specific fields as needed.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::entities::waitlist_entry::WaitlistEntry;

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        verification_code: "123456".to_string(),
        verified: false,
        created_at: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Fixed timestamp for reproducible fixtures.
pub fn test_datetime() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
}
