use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::AddressBook;

pub fn run(book: &AddressBook) -> Result<CmdResult> {
    let contacts = book.records().cloned().collect();
    Ok(CmdResult::default().with_contacts(contacts))
}
