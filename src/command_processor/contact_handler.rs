//! Contact command handler
//!
//! Handles contact and phone commands: add, change, phone, remove-phone,
//! all and delete.
//
// # Examples
//
// ```
// let handler = ContactHandler;
// let args = CommandArgs::new("add".to_string(), vec!["John".to_string(), "1234567890".to_string()]);
// handler.execute(&args, &mut book)?;
// ```

use super::{CommandArgs, CommandHandler, CommandResult, INVALID_COMMAND, Response, find_contact};
use crate::book::AddressBook;
use crate::error::AddressBookError;
use crate::record::Record;
use log::debug;

#[derive(Debug)]
pub struct ContactHandler;

impl CommandHandler for ContactHandler {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
        match args.command.as_str() {
            "add" => add_contact(args, book),
            "change" => change_phone(args, book),
            "phone" => show_phones(args, book),
            "remove-phone" => remove_phone(args, book),
            "all" => Ok(list_contacts(book)),
            "delete" => delete_contact(args, book),
            _ => Ok(Response::reply(INVALID_COMMAND)),
        }
    }

    fn can_handle(&self, command: &str) -> bool {
        matches!(command, "add" | "change" | "phone" | "remove-phone" | "all" | "delete")
    }
}

fn add_contact(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name, phone] = args.require("add <name> <phone>")?;
    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        return Ok(Response::reply("Contact updated."));
    }
    let mut record = Record::new(name.as_str());
    record.add_phone(phone)?;
    debug!("Creating contact {}", name);
    book.add_record(record);
    Ok(Response::reply("Contact added."))
}

fn change_phone(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name, old, new] = args.require("change <name> <old_phone> <new_phone>")?;
    let record = find_contact(book, name)?;
    if record.edit_phone(old, new)? {
        Ok(Response::reply(format!("Phone number updated for contact {name}.")))
    } else {
        Ok(Response::reply(format!("Phone number {old} not found for contact {name}.")))
    }
}

fn show_phones(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name] = args.require("phone <name>")?;
    let record = find_contact(book, name)?;
    let phones: Vec<&str> = record.phones.iter().map(|p| p.as_str()).collect();
    Ok(Response::reply(format!("{name}'s phones: {}", phones.join(", "))))
}

fn remove_phone(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name, phone] = args.require("remove-phone <name> <phone>")?;
    let record = find_contact(book, name)?;
    if record.remove_phone(phone) {
        Ok(Response::reply(format!("Phone number {phone} removed from contact {name}.")))
    } else {
        Ok(Response::reply(format!("Phone number {phone} not found for contact {name}.")))
    }
}

fn list_contacts(book: &AddressBook) -> Response {
    if book.is_empty() {
        return Response::reply("Address book is empty.");
    }
    let mut lines = vec!["Contacts in address book:".to_string()];
    lines.extend(book.records().map(Record::to_string));
    Response::reply(lines.join("\n"))
}

fn delete_contact(args: &CommandArgs, book: &mut AddressBook) -> CommandResult {
    let [name] = args.require("delete <name>")?;
    match book.delete(name) {
        Some(_) => Ok(Response::reply(format!("Contact {name} deleted."))),
        None => Err(AddressBookError::NotFound(name.clone())),
    }
}
