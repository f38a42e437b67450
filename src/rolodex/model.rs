use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Textual pattern for birthdays, both on input and on display.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A field value failing its format contract. Distinct from
/// [`crate::error::RolodexError::Usage`]: validation failures carry their own
/// message and are never collapsed into the generic usage line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    #[error("Invalid date format: {0}. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}

/// A contact name. Non-empty; otherwise free-form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A phone number: exactly ten ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }
        Ok(Self(phone))
    }

    // Anchored over the whole string, so trailing garbage is rejected.
    fn is_valid(phone: &str) -> bool {
        phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A birthday, parsed from and displayed as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

// The field newtypes serialize as plain strings and re-validate on the way
// back in, so a persisted book can never smuggle in malformed values.

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Phone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// One contact: a name, an ordered list of phones (duplicates permitted),
/// and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. No dedup: the same number may be
    /// stored twice.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(raw)?);
        Ok(())
    }

    /// Index of the first phone equal to `raw`.
    pub fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == raw)
    }

    pub fn has_phone(&self, raw: &str) -> bool {
        self.position_of(raw).is_some()
    }

    /// Remove the first phone equal to `raw`. Returns whether anything
    /// was removed; absence is a normal outcome, not an error.
    pub fn remove_phone(&mut self, raw: &str) -> bool {
        match self.position_of(raw) {
            Some(i) => {
                self.phones.remove(i);
                true
            }
            None => false,
        }
    }

    /// Replace `old` with `new` in place, keeping list order and length.
    /// The replacement is validated like any added phone. `Ok(false)` when
    /// `old` is not present; the list is then untouched.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        match self.position_of(old) {
            Some(i) => {
                self.phones[i] = Phone::new(new)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Parse and store a birthday. Re-setting overwrites.
    pub fn set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(raw)?);
        Ok(())
    }
}

// The contact line shown by `phone` and `all`.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :", self.name)?;
        for phone in &self.phones {
            write!(f, " {}", phone)?;
        }
        Ok(())
    }
}

/// All records, keyed by contact name.
///
/// Composes an explicit map rather than exposing one: callers only see the
/// intended operations, and `find` returns a real `Option` instead of a
/// printable sentinel. Iteration is in name order, which keeps listings
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by name key.
    pub fn add(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Persisted as a plain sequence of records; the name-keyed map is rebuilt on
// load. Keys therefore always equal the record names, whatever the file says.
impl Serialize for AddressBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records.values())
    }
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add(record);
        }
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_exactly_ten_digits() {
        assert!(Phone::new("1234567890").is_ok());
    }

    #[test]
    fn phone_rejects_wrong_shapes() {
        assert!(matches!(
            Phone::new("123456789"),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("12345678ab").is_err());
        assert!(Phone::new("1234567890extra").is_err());
        assert!(Phone::new("").is_err());
    }

    #[test]
    fn name_rejects_empty() {
        assert!(matches!(Name::new(""), Err(ValidationError::EmptyName)));
        assert!(matches!(Name::new("   "), Err(ValidationError::EmptyName)));
        assert!(Name::new("John").is_ok());
    }

    #[test]
    fn birthday_round_trips_through_display() {
        let birthday = Birthday::parse("12.06.1990").unwrap();
        assert_eq!(birthday.to_string(), "12.06.1990");
        assert_eq!(Birthday::parse("29.02.2000").unwrap().to_string(), "29.02.2000");
    }

    #[test]
    fn birthday_rejects_malformed_input() {
        assert!(matches!(
            Birthday::parse("1990-06-12"),
            Err(ValidationError::InvalidBirthday(_))
        ));
        assert!(Birthday::parse("31.02.2000").is_err());
        assert!(Birthday::parse("12.06.1990junk").is_err());
        assert!(Birthday::parse("not a date").is_err());
    }

    #[test]
    fn edit_phone_replaces_in_place() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("3333333333").unwrap();

        assert!(record.edit_phone("2222222222", "9999999999").unwrap());
        let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(phones, ["1111111111", "9999999999", "3333333333"]);
    }

    #[test]
    fn edit_phone_on_absent_number_is_a_noop() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1111111111").unwrap();

        assert!(!record.edit_phone("0000000000", "9999999999").unwrap());
        assert_eq!(record.phones().len(), 1);
        assert!(record.has_phone("1111111111"));
    }

    #[test]
    fn edit_phone_validates_the_replacement() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1111111111").unwrap();

        assert!(record.edit_phone("1111111111", "short").is_err());
        // Failed edits leave the original entry behind.
        assert!(record.has_phone("1111111111"));
    }

    #[test]
    fn remove_phone_drops_exactly_one_entry() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();

        assert!(record.remove_phone("1111111111"));
        assert_eq!(record.phones().len(), 1);
        assert!(!record.remove_phone("0000000000"));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn duplicate_phones_are_permitted() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn set_birthday_overwrites() {
        let mut record = Record::new("Jane").unwrap();
        record.set_birthday("25.02.1998").unwrap();
        record.set_birthday("26.02.1998").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "26.02.1998");
    }

    #[test]
    fn record_display_is_the_contact_line() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        assert_eq!(record.to_string(), "John : 1234567890 5555555555");
    }

    #[test]
    fn find_on_unknown_name_returns_none() {
        let book = AddressBook::new();
        assert!(book.find("Nobody").is_none());
    }

    #[test]
    fn add_overwrites_by_name_key() {
        let mut book = AddressBook::new();
        let mut first = Record::new("John").unwrap();
        first.add_phone("1111111111").unwrap();
        book.add(first);

        let replacement = Record::new("John").unwrap();
        book.add(replacement);

        assert_eq!(book.len(), 1);
        assert!(book.find("John").unwrap().phones().is_empty());
    }

    #[test]
    fn records_iterate_in_name_order() {
        let mut book = AddressBook::new();
        book.add(Record::new("Zoe").unwrap());
        book.add(Record::new("Adam").unwrap());
        book.add(Record::new("Mia").unwrap());

        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["Adam", "Mia", "Zoe"]);
    }

    #[test]
    fn book_serde_round_trip_rekeys_by_name() {
        let mut book = AddressBook::new();
        let mut john = Record::new("John").unwrap();
        john.add_phone("1234567890").unwrap();
        john.set_birthday("27.02.1972").unwrap();
        book.add(john);
        book.add(Record::new("Jane").unwrap());

        let json = serde_json::to_string(&book).unwrap();
        let restored: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, book);
        assert!(restored.find("John").unwrap().has_phone("1234567890"));
    }

    #[test]
    fn book_rejects_malformed_persisted_values() {
        let json = r#"[{"name": "John", "phones": ["123"]}]"#;
        assert!(serde_json::from_str::<AddressBook>(json).is_err());
    }
}
