//! One interactive session: the address book plus the commands that act on it.

use crate::book::AddressBook;
use crate::command_processor::{CommandArgs, CommandProcessor, Response};
use crate::config::Config;
use log::debug;

pub const NO_COMMAND: &str = "No command entered. Please enter a command.";

#[derive(Debug)]
pub struct Session {
    book: AddressBook,
    processor: CommandProcessor,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self::with_processor(CommandProcessor::new(config.birthdays.default_window_days))
    }

    pub fn with_processor(processor: CommandProcessor) -> Self {
        Self { book: AddressBook::new(), processor }
    }

    /// Runs one line of input and returns what to print.
    pub fn handle_line(&mut self, line: &str) -> Response {
        match CommandArgs::parse(line) {
            Ok(args) => self.processor.execute(&args, &mut self.book),
            Err(e) => {
                debug!("Skipping input: {}", e);
                Response::reply(NO_COMMAND)
            }
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::with_processor(CommandProcessor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        let mut session = Session::default();
        assert_eq!(session.handle_line("   "), Response::reply(NO_COMMAND));
    }

    #[test]
    fn test_commands_are_case_insensitive() {
        let mut session = Session::default();
        assert_eq!(session.handle_line("HeLLo"), Response::reply("How can I help you?"));
        assert!(session.handle_line("EXIT").is_exit());
    }

    #[test]
    fn test_state_persists_between_lines() {
        let mut session = Session::default();
        session.handle_line("add John 1234567890");
        assert_eq!(session.book().len(), 1);
    }
}
