use crate::command_processor::COMMANDS;
use crate::command_processor::exit_handler::FAREWELL;
use crate::completion::CommandCompleter;
use crate::config::Config;
use crate::session::Session;
use anyhow::{Context, Result};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

pub struct Application {
    session: Session,
    prompt: String,
}

impl Application {
    pub fn new(config: &Config) -> Self {
        Self { session: Session::new(config), prompt: config.prompt.clone() }
    }

    /// Reads commands until `close`/`exit`, Ctrl-C or end of input.
    pub fn run(&mut self) -> Result<()> {
        log::info!("Starting address book assistant");

        let mut rl: Editor<CommandCompleter, DefaultHistory> =
            Editor::new().context("Failed to initialise the line editor")?;
        rl.set_helper(Some(CommandCompleter::new(COMMANDS.iter().copied())));

        println!("Welcome to the assistant bot!");

        loop {
            match rl.readline(&self.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    let response = self.session.handle_line(&line);
                    println!("{}", response.text());
                    if response.is_exit() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    log::info!("Input closed, leaving");
                    println!("{}", FAREWELL);
                    break;
                }
                Err(err) => {
                    log::error!("Failed to read input: {:?}", err);
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        log::info!("Session ended with {} contacts", self.session.book().len());
        Ok(())
    }
}
