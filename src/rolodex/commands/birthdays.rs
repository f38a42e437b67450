use crate::commands::{CmdMessage, CmdResult, Congratulation};
use crate::error::Result;
use crate::model::AddressBook;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

const LOOKAHEAD_DAYS: i64 = 7;

/// Contacts whose birthday falls within the next seven days of `today`
/// (inclusive, so a birthday today qualifies).
///
/// The congratulation date is moved off the weekend to the following Monday.
/// The seven-day window is checked before that shift, not after it, so a
/// Saturday birthday on the window's last day still shows up with a Monday
/// date two days past it.
pub fn run(book: &AddressBook, today: NaiveDate) -> Result<CmdResult> {
    let mut upcoming: Vec<Congratulation> = book
        .records()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let projected = next_occurrence(birthday.date(), today);
            if (projected - today).num_days() > LOOKAHEAD_DAYS {
                return None;
            }
            Some(Congratulation {
                name: record.name().to_string(),
                date: shift_off_weekend(projected),
            })
        })
        .collect();

    upcoming.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));

    let mut result = CmdResult::default().with_congratulations(upcoming);
    if result.congratulations.is_empty() {
        result.add_message(CmdMessage::info("No birthdays the next seven days"));
    }
    Ok(result)
}

/// The birthday's next occurrence on or after `today`.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = in_year(birthday, today.year());
    if this_year < today {
        in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

// Feb 29 lands on Mar 1 in non-leap years.
fn in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("Mar 1 exists in every year")
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
