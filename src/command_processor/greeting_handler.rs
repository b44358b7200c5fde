use super::{CommandArgs, CommandHandler, CommandResult, Response};
use crate::book::AddressBook;

#[derive(Debug)]
pub struct GreetingHandler;

impl CommandHandler for GreetingHandler {
    fn execute(&self, _args: &CommandArgs, _book: &mut AddressBook) -> CommandResult {
        Ok(Response::reply("How can I help you?"))
    }

    fn can_handle(&self, command: &str) -> bool {
        command == "hello"
    }
}
