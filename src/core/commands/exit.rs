use std::io::Write;

use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;

/// Requests session termination. The optional status argument defaults to
/// 0, and an unparseable one is treated the same as an absent one.
#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    fn execute(
        &self,
        args: &[String],
        _state: &mut ShellState,
        _out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let code = args
            .first()
            .and_then(|raw| raw.parse::<i32>().ok())
            .unwrap_or(0);
        Ok(Outcome::Exit(code))
    }
}
