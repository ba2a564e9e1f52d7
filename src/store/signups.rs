//! Signup store
//!
//! `SignupStore` owns the waitlist: ordered signup records, duplicate
//! rejection, day counts and CSV export. Every operation re-reads the
//! backend before acting, so several components (form, admin panel, CLI)
//! can share one store without a stale in-process cache.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use super::backend::{JsonFileBackend, MemoryBackend, SignupBackend};
use super::error::StoreResult;
use super::types::SignupRecord;

/// Header row of every CSV export
pub const CSV_HEADER: &str = "Email,Signup Date";

/// The waitlist store
///
/// Records are kept newest first. `add` is the only way records enter the
/// list and `clear` the only way they leave, so ordering is an append-time
/// property rather than a sort.
pub struct SignupStore {
    backend: Box<dyn SignupBackend>,
}

impl SignupStore {
    /// Create a store over an explicit backend
    pub fn new(backend: Box<dyn SignupBackend>) -> Self {
        Self { backend }
    }

    /// Create a store persisted as a JSON file under `data_dir`
    pub fn open_json(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(JsonFileBackend::new(data_dir)))
    }

    /// Create a volatile store for tests and demos
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryBackend::new()))
    }

    /// All records, newest first
    pub fn get_all(&self) -> StoreResult<Vec<SignupRecord>> {
        self.backend.load()
    }

    /// Add a signup
    ///
    /// Returns `Ok(true)` if the email was recorded and `Ok(false)` if an
    /// identical email is already present. The comparison is byte-exact:
    /// addresses differing only in case are treated as distinct.
    pub fn add(&self, email: &str) -> StoreResult<bool> {
        let mut records = self.backend.load()?;

        if records.iter().any(|r| r.email == email) {
            return Ok(false);
        }

        records.insert(0, SignupRecord::new(email));
        self.backend.save(&records)?;

        Ok(true)
    }

    /// Remove every signup
    pub fn clear(&self) -> StoreResult<()> {
        self.backend.wipe()
    }

    /// Total number of signups
    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.backend.load()?.len())
    }

    /// Number of signups whose local calendar date is today
    pub fn today_count(&self) -> StoreResult<usize> {
        self.count_on(Local::now().date_naive())
    }

    /// Number of signups on a given local calendar date
    pub fn count_on(&self, date: NaiveDate) -> StoreResult<usize> {
        let records = self.backend.load()?;
        Ok(records.iter().filter(|r| r.local_date() == date).count())
    }

    /// Render the full list as CSV
    ///
    /// Returns the empty string when the store is empty. Otherwise the
    /// header row comes first and rows follow store order, with no
    /// trailing newline. Values are written verbatim, with no quoting
    /// or escaping.
    pub fn to_csv(&self) -> StoreResult<String> {
        let records = self.backend.load()?;
        if records.is_empty() {
            return Ok(String::new());
        }

        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(CSV_HEADER.to_string());
        for record in &records {
            lines.push(format!("{},{}", record.email, record.display_date()));
        }

        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_add_and_count() {
        let store = SignupStore::in_memory();
        assert_eq!(store.count().unwrap(), 0);

        assert!(store.add("a@example.com").unwrap());
        assert!(store.add("b@example.com").unwrap());

        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_duplicate_rejected() {
        let store = SignupStore::in_memory();

        assert!(store.add("a@example.com").unwrap());
        assert!(!store.add("a@example.com").unwrap());

        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let store = SignupStore::in_memory();

        assert!(store.add("User@Example.com").unwrap());
        assert!(store.add("user@example.com").unwrap());

        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_newest_first_order() {
        let store = SignupStore::in_memory();

        store.add("first@example.com").unwrap();
        store.add("second@example.com").unwrap();
        store.add("third@example.com").unwrap();

        let records = store.get_all().unwrap();
        let emails: Vec<&str> = records.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(
            emails,
            vec!["third@example.com", "second@example.com", "first@example.com"]
        );
    }

    #[test]
    fn test_clear() {
        let store = SignupStore::in_memory();

        store.add("a@example.com").unwrap();
        store.add("b@example.com").unwrap();
        store.clear().unwrap();

        assert_eq!(store.count().unwrap(), 0);
        assert!(store.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_csv_empty_store_is_empty_string() {
        let store = SignupStore::in_memory();
        assert_eq!(store.to_csv().unwrap(), "");
    }

    #[test]
    fn test_csv_rows_follow_store_order() {
        let store = SignupStore::in_memory();
        store.add("first@example.com").unwrap();
        store.add("second@example.com").unwrap();

        let csv = store.to_csv().unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Email,Signup Date");
        assert!(lines[1].starts_with("second@example.com,"));
        assert!(lines[2].starts_with("first@example.com,"));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_count_on_compares_calendar_dates() {
        let backend = MemoryBackend::new();

        // Two records a week apart, pinned via local wall-clock times so
        // the calendar-date comparison is timezone independent.
        let day_a = Local.with_ymd_and_hms(2026, 6, 10, 9, 0, 0).single().unwrap();
        let day_b = Local.with_ymd_and_hms(2026, 6, 17, 9, 0, 0).single().unwrap();
        backend
            .save(&[
                SignupRecord::with_date("a@example.com", day_a.with_timezone(&Utc)),
                SignupRecord::with_date("b@example.com", day_a.with_timezone(&Utc)),
                SignupRecord::with_date("c@example.com", day_b.with_timezone(&Utc)),
            ])
            .unwrap();

        let store = SignupStore::new(Box::new(backend));

        assert_eq!(
            store
                .count_on(NaiveDate::from_ymd_opt(2026, 6, 10).unwrap())
                .unwrap(),
            2
        );
        assert_eq!(
            store
                .count_on(NaiveDate::from_ymd_opt(2026, 6, 17).unwrap())
                .unwrap(),
            1
        );
        assert_eq!(
            store
                .count_on(NaiveDate::from_ymd_opt(2026, 6, 11).unwrap())
                .unwrap(),
            0
        );
    }

    #[test]
    fn test_today_count_sees_fresh_add() {
        let store = SignupStore::in_memory();
        store.add("a@example.com").unwrap();

        // Derive "today" from the record itself so the assertion cannot
        // straddle midnight.
        let today = store.get_all().unwrap()[0].local_date();
        assert_eq!(store.count_on(today).unwrap(), 1);
    }
}
