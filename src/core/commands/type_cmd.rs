use std::io::Write;

use super::{Command, CommandError, Outcome, BUILTINS};
use crate::core::state::ShellState;
use crate::path::PathResolver;

/// Reports how a name would be dispatched: as a built-in, as an external
/// program found on the search path, or not at all.
#[derive(Clone)]
pub struct TypeCommand {
    resolver: PathResolver,
}

impl Default for TypeCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCommand {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }
}

impl Command for TypeCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let Some(name) = args.first() else {
            writeln!(out, "type: missing operand")?;
            return Ok(Outcome::Continue);
        };

        if BUILTINS.contains(&name.as_str()) {
            writeln!(out, "{} is a shell builtin", name)?;
        } else if let Some(path) = self.resolver.resolve(name, state.search_path()) {
            writeln!(out, "{} is {}", name, path.display())?;
        } else {
            writeln!(out, "{}: not found", name)?;
        }

        Ok(Outcome::Continue)
    }
}
