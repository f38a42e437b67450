use crate::model::Record;
use chrono::NaiveDate;

pub mod add;
pub mod birthday;
pub mod birthdays;
pub mod change;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod phone;
pub mod remove;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A contact due for congratulation, with the weekend-adjusted date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Congratulation {
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub contacts: Vec<Record>,
    pub congratulations: Vec<Congratulation>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_contacts(mut self, contacts: Vec<Record>) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_congratulations(mut self, congratulations: Vec<Congratulation>) -> Self {
        self.congratulations = congratulations;
        self
    }
}
