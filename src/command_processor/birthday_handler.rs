//! Birthday command handler
//!
//! Handles add-birthday, show-birthday and birthdays.
//
// # Examples
//
// ```
// let handler = BirthdayHandler::new(7);
// let args = CommandArgs::new("birthdays".to_string(), vec!["14".to_string()]);
// handler.execute(&args, &mut book)?;
// ```

use super::{CommandArgs, CommandHandler, CommandResult, INVALID_COMMAND, Response, find_contact};
use crate::book::AddressBook;
use crate::error::AddressBookError;
use chrono::{Local, NaiveDate};
use log::debug;

#[derive(Debug)]
pub struct BirthdayHandler {
    default_window: u32,
    today: fn() -> NaiveDate,
}

impl BirthdayHandler {
    pub fn new(default_window: u32) -> Self {
        Self { default_window, today: local_today }
    }

    /// Uses `today` instead of the local clock.
    pub fn with_clock(default_window: u32, today: fn() -> NaiveDate) -> Self {
        Self { default_window, today }
    }

    fn upcoming(&self, args: &CommandArgs, book: &AddressBook) -> CommandResult {
        let days = match args.args.first() {
            Some(value) => value.parse::<u32>().map_err(|_| {
                AddressBookError::InvalidArgument(format!("Invalid number of days: {value}."))
            })?,
            None => self.default_window,
        };
        let today = (self.today)();
        let upcoming = book.upcoming_birthdays_from(today, days);
        debug!("{} upcoming birthdays within {} days of {}", upcoming.len(), days, today);

        if upcoming.is_empty() {
            return Ok(Response::reply(match days {
                7 => "No upcoming birthdays within the next week.".to_string(),
                1 => "No upcoming birthdays within the next day.".to_string(),
                _ => format!("No upcoming birthdays within the next {days} days."),
            }));
        }
        let mut lines = vec!["Upcoming birthdays:".to_string()];
        for record in upcoming {
            if let Some(birthday) = record.birthday {
                lines.push(format!("{} on {}", record.name, birthday));
            }
        }
        Ok(Response::reply(lines.join("\n")))
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

impl CommandHandler for BirthdayHandler {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
        match args.command.as_str() {
            "add-birthday" => add_birthday(args, book),
            "show-birthday" => show_birthday(args, book),
            "birthdays" => self.upcoming(args, book),
            _ => Ok(Response::reply(INVALID_COMMAND)),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add-birthday" | "show-birthday" | "birthdays")
    }
}

fn add_birthday(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name, date] = args.require("add-birthday <name> <DD.MM.YYYY>")?;
    find_contact(book, name)?.add_birthday(date)?;
    Ok(Response::reply(format!("Birthday added for contact {name}.")))
}

fn show_birthday(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name] = args.require("show-birthday <name>")?;
    match find_contact(book, name)?.birthday {
        Some(birthday) => Ok(Response::reply(format!("{name}'s birthday is on {birthday}."))),
        None => Ok(Response::reply(format!("Birthday not set for contact {name}."))),
    }
}
