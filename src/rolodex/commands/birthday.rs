use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

/// Parse `date` as DD.MM.YYYY and store it on the record. Re-adding
/// overwrites the previous birthday.
pub fn set(book: &mut AddressBook, name: &str, date: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match book.find_mut(name) {
        Some(record) => {
            record.set_birthday(date)?;
            result.add_message(CmdMessage::success(format!(
                "Birthday for contact {} added",
                name
            )));
        }
        None => result.add_message(helpers::record_not_found(name)),
    }

    Ok(result)
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => result.add_message(CmdMessage::info(format!(
                "{} birthday at {}",
                name, birthday
            ))),
            None => result.add_message(CmdMessage::warning(format!(
                "There is no birthday record for contact {}",
                name
            ))),
        },
        None => result.add_message(helpers::record_not_found(name)),
    }

    Ok(result)
}
