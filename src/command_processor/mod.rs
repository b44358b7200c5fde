use crate::book::AddressBook;
use crate::error::AddressBookError;
use crate::record::Record;
use anyhow::{Result, anyhow};
use log::{Level, debug, info, log};
use std::fmt::Debug;

pub mod birthday_handler;
pub mod contact_handler;
pub mod email_handler;
pub mod exit_handler;
pub mod greeting_handler;
pub mod help_handler;

/// Every command word the dispatcher understands, in help order
pub const COMMANDS: &[&str] = &[
    "hello",
    "add",
    "change",
    "phone",
    "remove-phone",
    "email",
    "add-email",
    "change-email",
    "show-email",
    "remove-email",
    "all",
    "delete",
    "add-birthday",
    "show-birthday",
    "birthdays",
    "help",
    "close",
    "exit",
];

pub const INVALID_COMMAND: &str = "Invalid command.";

/// Level for mistakes in user input; the reply already tells the user, so
/// they stay below the default `warn` filter
pub const INPUT_ERROR_LEVEL: Level = Level::Info;

/// Parsed command line: lower-cased command word plus positional arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArgs {
    pub command: String,
    pub args: Vec<String>,
}

impl CommandArgs {
    pub fn new(command: String, args: Vec<String>) -> Self {
        Self { command, args }
    }

    /// Splits on whitespace. There is no quoting, so an argument can never
    /// contain a space.
    pub fn parse(input: &str) -> Result<Self> {
        let mut tokens = input.split_whitespace();
        let command = tokens.next().ok_or_else(|| anyhow!("No command provided"))?.to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();
        debug!("Parsed command: {:?}, args: {:?}", command, args);
        Ok(Self { command, args })
    }

    /// Returns the first `N` arguments, or the usage error when fewer were
    /// given. Extra arguments are ignored.
    pub fn require<const N: usize>(
        &self,
        usage: &'static str,
    ) -> Result<&[String; N], AddressBookError> {
        if self.args.len() > N {
            debug!("Ignoring extra arguments for '{}': {:?}", self.command, &self.args[N..]);
        }
        self.args
            .get(..N)
            .and_then(|head| head.try_into().ok())
            .ok_or(AddressBookError::InsufficientArguments(usage))
    }
}

pub type CommandResult = Result<Response, AddressBookError>;

/// What the loop should do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Reply(String),
    Exit(String),
}

impl Response {
    pub fn reply(text: impl Into<String>) -> Self {
        Response::Reply(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Response::Reply(text) | Response::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Response::Exit(_))
    }
}

pub trait CommandHandler: Debug {
    fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> CommandResult;
    fn can_handle(&self, command: &str) -> bool;
}

#[derive(Debug)]
pub struct CommandProcessor {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl CommandProcessor {
    pub fn new(default_birthday_window: u32) -> Self {
        let handlers: Vec<Box<dyn CommandHandler>> = vec![
            Box::new(greeting_handler::GreetingHandler),
            Box::new(contact_handler::ContactHandler),
            Box::new(email_handler::EmailHandler),
            Box::new(birthday_handler::BirthdayHandler::new(default_birthday_window)),
            Box::new(help_handler::HelpHandler),
            Box::new(exit_handler::ExitHandler),
        ];
        Self { handlers }
    }

    /// Runs the command and turns any failure into its reply text.
    pub fn execute(&self, args: &CommandArgs, book: &mut AddressBook) -> Response {
        let Some(handler) = self.handlers.iter().find(|h| h.can_handle(&args.command)) else {
            log!(INPUT_ERROR_LEVEL, "Unrecognized command: {}", args.command);
            return Response::reply(INVALID_COMMAND);
        };
        info!("Executing command '{}' with arguments: {:?}", args.command, args.args);
        match handler.execute(args, book) {
            Ok(response) => {
                debug!("Command '{}' executed successfully", args.command);
                response
            }
            Err(e) => {
                log!(INPUT_ERROR_LEVEL, "Command '{}' failed: {:?}", args.command, e);
                Response::Reply(e.to_string())
            }
        }
    }
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new(crate::book::DEFAULT_BIRTHDAY_WINDOW_DAYS)
    }
}

/// Looks up a contact, mapping absence to [`AddressBookError::NotFound`]
pub(crate) fn find_contact<'a>(
    book: &'a mut AddressBook,
    name: &str,
) -> Result<&'a mut Record, AddressBookError> {
    book.find_mut(name).ok_or_else(|| AddressBookError::NotFound(name.to_string()))
}
