use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

/// Replace `old` with `new` in a record's phone list. The new number goes
/// through the same validation as an added one.
pub fn run(book: &mut AddressBook, name: &str, old: &str, new: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match book.find_mut(name) {
        Some(record) => {
            if record.edit_phone(old, new)? {
                result.add_message(CmdMessage::success(format!(
                    "Phone number {} was changed to {}",
                    old, new
                )));
            } else {
                result.add_message(helpers::phone_not_found(old, name));
            }
        }
        None => result.add_message(helpers::record_not_found(name)),
    }

    Ok(result)
}
