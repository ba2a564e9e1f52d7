//! Waitlist persistence
//!
//! The store keeps an ordered list of signup records behind a pluggable
//! backend. Production uses a JSON file on disk; tests and the demo use an
//! in-memory backend with identical semantics.

pub mod backend;
pub mod error;
pub mod signups;
pub mod types;

pub use backend::{JsonFileBackend, MemoryBackend, SignupBackend, STORE_FILE_NAME};
pub use error::{StoreError, StoreResult};
pub use signups::{SignupStore, CSV_HEADER};
pub use types::SignupRecord;
