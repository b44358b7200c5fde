//! Tab completion over the command vocabulary.

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

#[derive(Debug, Clone)]
pub struct CommandCompleter {
    commands: Vec<String>,
}

impl CommandCompleter {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { commands: commands.into_iter().map(Into::into).collect() }
    }

    /// Commands starting with `prefix`, ignoring case.
    pub fn candidates(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.commands
            .iter()
            .filter(|command| command.starts_with(&prefix))
            .map(String::as_str)
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let head = &line[..pos];
        let start = head.len() - head.trim_start().len();
        // Only the command word is completed
        if head[start..].contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }
        let pairs = self
            .candidates(&head[start..])
            .into_iter()
            .map(|command| Pair { display: command.to_string(), replacement: command.to_string() })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_processor::COMMANDS;
    use pretty_assertions::assert_eq;
    use rustyline::history::DefaultHistory;

    fn complete(line: &str) -> (usize, Vec<String>) {
        let completer = CommandCompleter::new(COMMANDS.iter().copied());
        let history = DefaultHistory::new();
        let ctx = Context::new(&history);
        let (start, pairs) = completer.complete(line, line.len(), &ctx).unwrap();
        (start, pairs.into_iter().map(|pair| pair.replacement).collect())
    }

    #[test]
    fn test_candidates_by_prefix() {
        let completer = CommandCompleter::new(COMMANDS.iter().copied());
        assert_eq!(completer.candidates("add"), vec!["add", "add-email", "add-birthday"]);
        assert_eq!(completer.candidates("SHOW"), vec!["show-email", "show-birthday"]);
        assert!(completer.candidates("zzz").is_empty());
    }

    #[test]
    fn test_empty_prefix_lists_everything() {
        let completer = CommandCompleter::new(COMMANDS.iter().copied());
        assert_eq!(completer.candidates("").len(), COMMANDS.len());
    }

    #[test]
    fn test_complete_replaces_from_first_word_start() {
        assert_eq!(complete("  show-b"), (2, vec!["show-birthday".to_string()]));
        assert_eq!(complete("ex"), (0, vec!["exit".to_string()]));
    }

    #[test]
    fn test_complete_ignores_arguments() {
        assert_eq!(complete("add Jo"), (6, Vec::new()));
        assert_eq!(complete(" phone "), (7, Vec::new()));
    }
}
