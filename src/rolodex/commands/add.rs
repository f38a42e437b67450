use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{AddressBook, Record};

/// Create-or-reuse the record for `name`, then append `phone` to it.
pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if book.find(name).is_none() {
        book.add(Record::new(name)?);
        result.add_message(CmdMessage::success("Contact added"));
    }

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        result.add_message(CmdMessage::success(format!(
            "New phone number for contact {} added",
            name
        )));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RolodexError;
    use crate::model::AddressBook;

    #[test]
    fn creates_record_and_appends_phone() {
        let mut book = AddressBook::new();
        let result = run(&mut book, "John", "1234567890").unwrap();

        assert_eq!(result.messages.len(), 2);
        assert_eq!(result.messages[0].content, "Contact added");
        assert!(book.find("John").unwrap().has_phone("1234567890"));
    }

    #[test]
    fn reuses_an_existing_record() {
        let mut book = AddressBook::new();
        run(&mut book, "John", "1234567890").unwrap();
        let result = run(&mut book, "John", "5555555555").unwrap();

        // No "Contact added" the second time around.
        assert_eq!(result.messages.len(), 1);
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn invalid_phone_propagates_as_validation() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "John", "123").unwrap_err();
        assert!(matches!(err, RolodexError::Validation(_)));
    }

    #[test]
    fn empty_name_propagates_as_validation() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "  ", "1234567890").unwrap_err();
        assert!(matches!(err, RolodexError::Validation(_)));
        assert!(book.is_empty());
    }
}
