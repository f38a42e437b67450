use super::DataStore;
use crate::error::Result;
use crate::model::AddressBook;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    book: AddressBook,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: AddressBook) -> Self {
        Self { book }
    }
}

impl DataStore for InMemoryStore {
    fn load_book(&self) -> Result<AddressBook> {
        Ok(self.book.clone())
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.book = book.clone();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::{AddressBook, Record};

    pub struct BookFixture {
        pub book: AddressBook,
    }

    impl Default for BookFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BookFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(name).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add(record);
            self
        }

        pub fn with_birthday_contact(mut self, name: &str, phone: &str, birthday: &str) -> Self {
            let mut record = Record::new(name).unwrap();
            record.add_phone(phone).unwrap();
            record.set_birthday(birthday).unwrap();
            self.book.add(record);
            self
        }
    }
}
