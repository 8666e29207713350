use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::{Command, CommandError, Outcome};
use crate::core::state::ShellState;
use crate::path::PathExpander;

/// Changes the session working directory. With no argument (or `~`) the
/// target is the home directory, falling back to `/` when none is known.
#[derive(Clone)]
pub struct CdCommand {
    expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let home = state.home_dir().map(|p| p.to_path_buf());
        let fallback = || home.clone().unwrap_or_else(|| PathBuf::from("/"));

        let target = match args.first() {
            None => fallback(),
            Some(arg) if arg == "~" => fallback(),
            Some(arg) => self.expander.expand(arg, home.as_deref()),
        };

        let absolute = if target.is_absolute() {
            target.clone()
        } else {
            state.current_dir().join(&target)
        };

        match fs::canonicalize(&absolute) {
            Ok(dir) if dir.is_dir() => {
                state.set_current_dir(dir);
            }
            _ => {
                // Any failure leaves the working directory untouched.
                writeln!(out, "cd: {}: No such file or directory", target.display())?;
            }
        }

        Ok(Outcome::Continue)
    }
}
