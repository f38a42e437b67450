use crate::commands::CmdMessage;

// Absent records and phones are normal, reportable outcomes. These keep the
// wording identical across commands.

pub fn record_not_found(name: &str) -> CmdMessage {
    CmdMessage::warning(format!("Record {} not found", name))
}

pub fn phone_not_found(phone: &str, name: &str) -> CmdMessage {
    CmdMessage::warning(format!("Phone {} not found in {} contact", phone, name))
}
