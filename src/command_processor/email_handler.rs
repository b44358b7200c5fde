//! Email command handler
//!
//! Handles email, add-email, change-email, show-email and remove-email.

use super::{CommandArgs, CommandHandler, CommandResult, INVALID_COMMAND, Response, find_contact};
use crate::book::AddressBook;

#[derive(Debug)]
pub struct EmailHandler;

impl CommandHandler for EmailHandler {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
        match args.command.as_str() {
            "email" | "add-email" => add_email(args, book),
            "change-email" => change_email(args, book),
            "show-email" => show_emails(args, book),
            "remove-email" => remove_email(args, book),
            _ => Ok(Response::reply(INVALID_COMMAND)),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "email" | "add-email" | "change-email" | "show-email" | "remove-email")
    }
}

fn add_email(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name, email] = args.require("add-email <name> <email>")?;
    find_contact(book, name)?.add_email(email)?;
    Ok(Response::reply(format!("Email {email} added for contact {name}.")))
}

fn change_email(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name, old, new] = args.require("change-email <name> <old_email> <new_email>")?;
    if find_contact(book, name)?.edit_email(old, new)? {
        Ok(Response::reply(format!("Email updated for contact {name}.")))
    } else {
        Ok(Response::reply(format!("Email {old} not found for contact {name}.")))
    }
}

fn show_emails(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name] = args.require("show-email <name>")?;
    let record = find_contact(book, name)?;
    let emails: Vec<&str> = record.emails.iter().map(|e| e.as_str()).collect();
    Ok(Response::reply(format!("{name}'s emails: {}", emails.join(", "))))
}

fn remove_email(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name, email] = args.require("remove-email <name> <email>")?;
    if find_contact(book, name)?.remove_email(email) {
        Ok(Response::reply(format!("Email {email} removed from contact {name}.")))
    } else {
        Ok(Response::reply(format!("Email {email} not found for contact {name}.")))
    }
}
