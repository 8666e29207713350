use std::io::Write;

use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;

/// Prints the session working directory.
#[derive(Clone)]
pub struct PwdCommand;

impl Default for PwdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(
        &self,
        _args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        writeln!(out, "{}", state.current_dir().display())?;
        Ok(Outcome::Continue)
    }
}
