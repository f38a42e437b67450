//! # API Facade
//!
//! The single entry point for all address-book operations, regardless of the
//! UI driving them. The facade owns the in-memory [`AddressBook`] for the
//! session: it loads the book from the store at construction and writes it
//! back on [`RolodexApi::persist`] — nothing in between touches disk.
//!
//! The facade holds no business logic of its own; every method dispatches to
//! a command function and returns its structured `Result<CmdResult>`. It is
//! generic over [`DataStore`], so tests run against `InMemoryStore` while the
//! binary wires up `FileStore`.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;
use crate::store::DataStore;
use chrono::NaiveDate;

pub struct RolodexApi<S: DataStore> {
    store: S,
    book: AddressBook,
}

impl<S: DataStore> RolodexApi<S> {
    /// Load the persisted book (or start empty) and wrap it for a session.
    pub fn new(store: S) -> Result<Self> {
        let book = store.load_book()?;
        Ok(Self { store, book })
    }

    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.book, name, phone)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.book, name)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.book, name, phone)
    }

    pub fn change_phone(&mut self, name: &str, old: &str, new: &str) -> Result<CmdResult> {
        commands::change::run(&mut self.book, name, old, new)
    }

    pub fn contact_phones(&self, name: &str) -> Result<CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        commands::list::run(&self.book)
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        commands::birthday::set(&mut self.book, name, date)
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Result<CmdResult> {
        commands::birthdays::run(&self.book, today)
    }

    /// Write the session's book back to the store.
    pub fn persist(&mut self) -> Result<()> {
        self.store.save_book(&self.book)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn new_loads_the_persisted_book() {
        let fixture = BookFixture::new().with_contact("John", &["1234567890"]);
        let store = InMemoryStore::with_book(fixture.book);

        let api = RolodexApi::new(store).unwrap();
        assert!(api.book().find("John").is_some());
    }

    #[test]
    fn new_over_a_fresh_store_starts_empty() {
        let api = RolodexApi::new(InMemoryStore::new()).unwrap();
        assert!(api.book().is_empty());
    }

    #[test]
    fn dispatches_to_the_command_layer() {
        let mut api = RolodexApi::new(InMemoryStore::new()).unwrap();
        api.add_contact("John", "1234567890").unwrap();
        api.set_birthday("John", "12.06.1990").unwrap();

        let result = api.show_birthday("John").unwrap();
        assert_eq!(result.messages[0].content, "John birthday at 12.06.1990");
    }
}
