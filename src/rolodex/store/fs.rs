use super::DataStore;
use crate::error::{Result, RolodexError};
use crate::model::AddressBook;
use std::fs;
use std::path::{Path, PathBuf};

const BOOK_FILENAME: &str = "addressbook.json";

pub struct FileStore {
    data_dir: PathBuf,
    book_filename: String,
}

impl FileStore {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            book_filename: BOOK_FILENAME.to_string(),
        }
    }

    pub fn with_book_filename(mut self, filename: &str) -> Self {
        if !filename.is_empty() {
            self.book_filename = filename.to_string();
        }
        self
    }

    pub fn book_path(&self) -> PathBuf {
        self.data_dir.join(&self.book_filename)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(RolodexError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_book(&self) -> Result<AddressBook> {
        let path = self.book_path();
        if !path.exists() {
            return Ok(AddressBook::new());
        }
        let content = fs::read_to_string(path).map_err(RolodexError::Io)?;
        let book = serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(book)
    }

    fn save_book(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_dir(&self.data_dir)?;
        let content = serde_json::to_string_pretty(book).map_err(RolodexError::Serialization)?;
        fs::write(self.book_path(), content).map_err(RolodexError::Io)?;
        Ok(())
    }
}
