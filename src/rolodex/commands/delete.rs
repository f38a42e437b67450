use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match book.remove(name) {
        Some(record) => result.add_message(CmdMessage::success(format!(
            "The entry {} was deleted",
            record.name()
        ))),
        None => result.add_message(helpers::record_not_found(name)),
    }

    Ok(result)
}
