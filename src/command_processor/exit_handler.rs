//! Exit command handler
//!
//! Handles close and exit commands.

use super::{CommandArgs, CommandHandler, CommandResult, Response};
use crate::book::AddressBook;

pub const FAREWELL: &str = "Good bye!";

#[derive(Debug)]
pub struct ExitHandler;

impl CommandHandler for ExitHandler {
    fn execute(&self, _args: &CommandArgs, _book: &mut AddressBook) -> CommandResult {
        Ok(Response::Exit(FAREWELL.to_string()))
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "close" || command == "exit"
    }
}
