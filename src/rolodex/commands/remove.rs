use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::AddressBook;

/// Remove one phone from a record. Neither a missing record nor a missing
/// phone is an error.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    match book.find_mut(name) {
        Some(record) => {
            if record.remove_phone(phone) {
                result.add_message(CmdMessage::success(format!(
                    "Phone number {} was deleted from {} contact",
                    phone, name
                )));
            } else {
                result.add_message(helpers::phone_not_found(phone, name));
            }
        }
        None => result.add_message(helpers::record_not_found(name)),
    }

    Ok(result)
}
