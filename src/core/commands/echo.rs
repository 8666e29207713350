use std::io::Write;

use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;

/// Prints its arguments joined by single spaces. Quote handling already
/// happened during tokenizing, so the arguments are taken as-is.
#[derive(Clone)]
pub struct EchoCommand;

impl Default for EchoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        writeln!(out, "{}", args.join(" "))?;
        Ok(Outcome::Continue)
    }
}
