//! Hidden admin panel
//!
//! An operator view over the signup store, toggled by a keyboard chord.
//! The chord is a convenience gate, not an access-control boundary: any
//! deployment that exposes this surface beyond a local operator needs a
//! real authentication layer in front of it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;

use crate::store::{SignupStore, StoreResult};

/// Message shown in place of the signup list when the store is empty
pub const EMPTY_MESSAGE: &str = "No signups yet";

/// Confirmation prompt shown before clearing all signups
pub const CLEAR_PROMPT: &str = "Are you sure you want to clear all signups?";

/// A keyboard event as the panel sees it
///
/// `key` carries the already-shifted character, so the toggle chord
/// arrives as an uppercase `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub key: char,
}

impl KeyChord {
    /// Whether this chord toggles the admin panel
    ///
    /// Either primary modifier works, so the same chord serves
    /// Ctrl+Shift+A and Cmd+Shift+A keyboards.
    pub fn is_admin_toggle(&self) -> bool {
        (self.ctrl || self.meta) && self.shift && self.key == 'A'
    }
}

/// One rendered row of the signup list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminEntry {
    pub email: String,
    /// Abbreviated local timestamp, e.g. `Aug 5, 09:07`
    pub date_label: String,
}

/// Snapshot of the panel contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminView {
    pub total: usize,
    pub today: usize,
    /// Entries newest first
    pub entries: Vec<AdminEntry>,
}

impl AdminView {
    /// Empty-state message, present when there are no entries
    pub fn empty_message(&self) -> Option<&'static str> {
        self.entries.is_empty().then_some(EMPTY_MESSAGE)
    }
}

/// User confirmation gate for destructive actions
pub trait ConfirmPrompt {
    /// Present `message` and report whether the user accepted
    fn confirm(&self, message: &str) -> bool;
}

/// The admin panel
///
/// Owns only its open/closed flag; every view is computed fresh from the
/// store so the panel never shows stale data after a clear.
pub struct AdminPanel {
    store: Arc<SignupStore>,
    export_dir: PathBuf,
    open: bool,
}

impl AdminPanel {
    /// Create a panel over `store`, writing CSV exports under `export_dir`
    pub fn new(store: Arc<SignupStore>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            export_dir: export_dir.into(),
            open: false,
        }
    }

    /// Whether the panel is currently showing
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the panel
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the panel
    ///
    /// Close buttons and clicks outside the panel both land here.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// React to a keyboard event
    ///
    /// Returns true when the chord toggled the panel. Two presses always
    /// return the panel to its starting state.
    pub fn handle_key(&mut self, chord: &KeyChord) -> bool {
        if !chord.is_admin_toggle() {
            return false;
        }

        if self.open {
            self.close();
        } else {
            self.open();
        }
        true
    }

    /// Render the current store contents
    pub fn view(&self) -> StoreResult<AdminView> {
        let records = self.store.get_all()?;
        let today = self.store.today_count()?;

        let entries = records
            .iter()
            .map(|r| AdminEntry {
                email: r.email.clone(),
                date_label: r.short_date(),
            })
            .collect();

        Ok(AdminView {
            total: records.len(),
            today,
            entries,
        })
    }

    /// Write the CSV artifact into the export directory
    ///
    /// Returns the path of the written file, named with the current UTC
    /// date as `sorta-waitlist-<YYYY-MM-DD>.csv`. An empty store writes
    /// nothing and returns `None`.
    pub fn export_csv(&self) -> StoreResult<Option<PathBuf>> {
        let csv = self.store.to_csv()?;
        if csv.is_empty() {
            return Ok(None);
        }

        std::fs::create_dir_all(&self.export_dir)?;
        let filename = format!("sorta-waitlist-{}.csv", Utc::now().format("%Y-%m-%d"));
        let path = self.export_dir.join(filename);
        std::fs::write(&path, csv)?;

        Ok(Some(path))
    }

    /// Clear every signup, gated on user confirmation
    ///
    /// Returns true when the prompt was accepted and the store cleared.
    pub fn clear_all(&self, prompt: &dyn ConfirmPrompt) -> StoreResult<bool> {
        if !prompt.confirm(CLEAR_PROMPT) {
            return Ok(false);
        }

        self.store.clear()?;
        Ok(true)
    }

    /// Directory CSV exports land in
    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryBackend, SignupBackend, SignupRecord};
    use chrono::{Local, TimeZone};
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct AlwaysConfirm;

    impl ConfirmPrompt for AlwaysConfirm {
        fn confirm(&self, _message: &str) -> bool {
            true
        }
    }

    struct NeverConfirm;

    impl ConfirmPrompt for NeverConfirm {
        fn confirm(&self, _message: &str) -> bool {
            false
        }
    }

    struct RecordingPrompt {
        seen: RefCell<Option<String>>,
        answer: bool,
    }

    impl ConfirmPrompt for RecordingPrompt {
        fn confirm(&self, message: &str) -> bool {
            *self.seen.borrow_mut() = Some(message.to_string());
            self.answer
        }
    }

    fn toggle_chord() -> KeyChord {
        KeyChord {
            ctrl: true,
            meta: false,
            shift: true,
            key: 'A',
        }
    }

    #[test]
    fn test_chord_matching() {
        assert!(toggle_chord().is_admin_toggle());
        assert!(KeyChord {
            ctrl: false,
            meta: true,
            shift: true,
            key: 'A'
        }
        .is_admin_toggle());

        // No shift, no primary modifier, wrong key, unshifted key.
        assert!(!KeyChord {
            ctrl: true,
            meta: false,
            shift: false,
            key: 'A'
        }
        .is_admin_toggle());
        assert!(!KeyChord {
            ctrl: false,
            meta: false,
            shift: true,
            key: 'A'
        }
        .is_admin_toggle());
        assert!(!KeyChord {
            ctrl: true,
            meta: false,
            shift: true,
            key: 'B'
        }
        .is_admin_toggle());
        assert!(!KeyChord {
            ctrl: true,
            meta: false,
            shift: true,
            key: 'a'
        }
        .is_admin_toggle());
    }

    #[test]
    fn test_toggle_parity() {
        let store = Arc::new(SignupStore::in_memory());
        let dir = TempDir::new().unwrap();
        let mut panel = AdminPanel::new(store, dir.path());

        assert!(!panel.is_open());

        assert!(panel.handle_key(&toggle_chord()));
        assert!(panel.is_open());

        assert!(panel.handle_key(&toggle_chord()));
        assert!(!panel.is_open());

        // Non-matching chords leave the panel alone.
        let other = KeyChord {
            ctrl: true,
            meta: false,
            shift: false,
            key: 'A',
        };
        assert!(!panel.handle_key(&other));
        assert!(!panel.is_open());
    }

    #[test]
    fn test_view_empty_state() {
        let store = Arc::new(SignupStore::in_memory());
        let dir = TempDir::new().unwrap();
        let panel = AdminPanel::new(store, dir.path());

        let view = panel.view().unwrap();
        assert_eq!(view.total, 0);
        assert_eq!(view.today, 0);
        assert!(view.entries.is_empty());
        assert_eq!(view.empty_message(), Some("No signups yet"));
    }

    #[test]
    fn test_view_entries_newest_first_with_short_dates() {
        let backend = MemoryBackend::new();
        let when = Local.with_ymd_and_hms(2026, 8, 5, 9, 7, 0).single().unwrap();
        backend
            .save(&[
                SignupRecord::with_date("new@example.com", when.with_timezone(&Utc)),
                SignupRecord::with_date("old@example.com", when.with_timezone(&Utc)),
            ])
            .unwrap();

        let store = Arc::new(SignupStore::new(Box::new(backend)));
        let dir = TempDir::new().unwrap();
        let panel = AdminPanel::new(store, dir.path());

        let view = panel.view().unwrap();
        assert_eq!(view.total, 2);
        assert_eq!(view.entries[0].email, "new@example.com");
        assert_eq!(view.entries[1].email, "old@example.com");
        assert_eq!(view.entries[0].date_label, "Aug 5, 09:07");
        assert!(view.empty_message().is_none());
    }

    #[test]
    fn test_view_today_counts_fresh_signups() {
        let store = Arc::new(SignupStore::in_memory());
        store.add("a@example.com").unwrap();
        store.add("b@example.com").unwrap();

        let dir = TempDir::new().unwrap();
        let panel = AdminPanel::new(store, dir.path());

        let view = panel.view().unwrap();
        assert_eq!(view.total, 2);
        assert_eq!(view.today, 2);
    }

    #[test]
    fn test_export_writes_dated_csv() {
        let store = Arc::new(SignupStore::in_memory());
        store.add("first@example.com").unwrap();
        store.add("second@example.com").unwrap();

        let dir = TempDir::new().unwrap();
        let panel = AdminPanel::new(Arc::clone(&store), dir.path());

        let path = panel.export_csv().unwrap().unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("sorta-waitlist-"));
        assert!(name.ends_with(".csv"));
        assert_eq!(name.len(), "sorta-waitlist-YYYY-MM-DD.csv".len());

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(
            reader.headers().unwrap(),
            &csv::StringRecord::from(vec!["Email", "Signup Date"])
        );
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "second@example.com");
        assert_eq!(&rows[1][0], "first@example.com");
    }

    #[test]
    fn test_export_empty_store_writes_nothing() {
        let store = Arc::new(SignupStore::in_memory());
        let dir = TempDir::new().unwrap();
        let panel = AdminPanel::new(store, dir.path());

        assert!(panel.export_csv().unwrap().is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_clear_requires_confirmation() {
        let store = Arc::new(SignupStore::in_memory());
        store.add("a@example.com").unwrap();

        let dir = TempDir::new().unwrap();
        let panel = AdminPanel::new(Arc::clone(&store), dir.path());

        assert!(!panel.clear_all(&NeverConfirm).unwrap());
        assert_eq!(store.count().unwrap(), 1);

        assert!(panel.clear_all(&AlwaysConfirm).unwrap());
        assert_eq!(store.count().unwrap(), 0);
        assert_eq!(panel.view().unwrap().empty_message(), Some("No signups yet"));
    }

    #[test]
    fn test_clear_prompt_message() {
        let store = Arc::new(SignupStore::in_memory());
        let dir = TempDir::new().unwrap();
        let panel = AdminPanel::new(store, dir.path());

        let prompt = RecordingPrompt {
            seen: RefCell::new(None),
            answer: false,
        };
        panel.clear_all(&prompt).unwrap();

        assert_eq!(
            prompt.seen.borrow().as_deref(),
            Some("Are you sure you want to clear all signups?")
        );
    }
}
