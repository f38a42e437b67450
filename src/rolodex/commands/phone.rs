use crate::commands::{helpers, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    match book.find(name) {
        Some(record) => Ok(CmdResult::default().with_contacts(vec![record.clone()])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(helpers::record_not_found(name));
            Ok(result)
        }
    }
}
