//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the address book lives between
//! sessions. The book is persisted whole: loaded once at startup, saved once
//! at clean exit. There is no autosave and no partial write, so a crash
//! mid-session loses the changes since the last save.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file in the data
//!   directory (`addressbook.json` by default).
//! - [`memory::InMemoryStore`]: no persistence, for tests.
//!
//! Single user, single process; no locking is provided or required.

use crate::error::Result;
use crate::model::AddressBook;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the persisted book. An absent backing file yields an empty
    /// book, not an error.
    fn load_book(&self) -> Result<AddressBook>;

    /// Persist the whole book.
    fn save_book(&mut self, book: &AddressBook) -> Result<()>;
}
