//! Help command handler
//!
//! Lists every command with its arguments.

use super::{CommandArgs, CommandHandler, CommandResult, Response};
use crate::book::AddressBook;

const USAGE: &[(&str, &str)] = &[
    ("hello", "Greet the assistant"),
    ("add <name> <phone>", "Add a contact or a phone to an existing contact"),
    ("change <name> <old_phone> <new_phone>", "Replace a phone number"),
    ("phone <name>", "Show a contact's phone numbers"),
    ("remove-phone <name> <phone>", "Remove a phone number"),
    ("add-email <name> <email>", "Add an email (alias: email)"),
    ("change-email <name> <old_email> <new_email>", "Replace an email"),
    ("show-email <name>", "Show a contact's emails"),
    ("remove-email <name> <email>", "Remove an email"),
    ("all", "List every contact"),
    ("delete <name>", "Delete a contact"),
    ("add-birthday <name> <DD.MM.YYYY>", "Set a contact's birthday"),
    ("show-birthday <name>", "Show a contact's birthday"),
    ("birthdays [days]", "List birthdays coming up in the next days"),
    ("help", "Show this help message"),
    ("close | exit", "Exit the assistant"),
];

#[derive(Debug)]
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn execute(&self, _args: &CommandArgs, _book: &mut AddressBook) -> CommandResult {
        Ok(Response::Reply(help_text()))
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "help"
    }
}

fn help_text() -> String {
    let width = USAGE.iter().map(|(usage, _)| usage.len()).max().unwrap_or(0);
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(USAGE.iter().map(|(usage, about)| format!("  {usage:<width$}  {about}")));
    lines.join("\n")
}
