use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

mod cd;
mod echo;
mod exit;
mod pwd;
mod type_cmd;

pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use type_cmd::TypeCommand;

use crate::core::state::ShellState;
use crate::path::PathResolver;
use crate::process::{ProcessError, ProcessExecutor};

/// Names the dispatcher recognizes without consulting the search path.
pub const BUILTINS: [&str; 5] = ["cd", "echo", "exit", "pwd", "type"];

#[derive(Debug)]
pub enum CommandError {
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

/// What the interactive loop should do once a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit(i32),
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Echo(EchoCommand),
    Exit(ExitCommand),
    Pwd(PwdCommand),
    Type(TypeCommand),
}

impl Command for CommandType {
    fn execute(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state, out),
            CommandType::Echo(cmd) => cmd.execute(args, state, out),
            CommandType::Exit(cmd) => cmd.execute(args, state, out),
            CommandType::Pwd(cmd) => cmd.execute(args, state, out),
            CommandType::Type(cmd) => cmd.execute(args, state, out),
        }
    }
}

/// Routes a tokenized line to a built-in or to an external program.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    resolver: PathResolver,
    process_executor: ProcessExecutor,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut executor = Self {
            commands: BTreeMap::new(),
            resolver: PathResolver::new(),
            process_executor: ProcessExecutor::new(),
        };

        executor
            .commands
            .insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        executor
            .commands
            .insert("echo".to_string(), CommandType::Echo(EchoCommand::new()));
        executor
            .commands
            .insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        executor
            .commands
            .insert("pwd".to_string(), CommandType::Pwd(PwdCommand::new()));
        executor
            .commands
            .insert("type".to_string(), CommandType::Type(TypeCommand::new()));

        executor
    }

    /// Runs one tokenized line. An empty line is a no-op. Diagnostics for
    /// unresolvable commands go to `out`; only genuine I/O or spawn
    /// failures surface as errors, and none of them end the session.
    pub fn dispatch(
        &self,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let Some(name) = args.first() else {
            return Ok(Outcome::Continue);
        };

        if let Some(cmd) = self.commands.get(name.as_str()) {
            return cmd.execute(&args[1..], state, out);
        }

        self.run_external(name, &args[1..], state, out)
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    fn run_external(
        &self,
        name: &str,
        args: &[String],
        state: &mut ShellState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        // A name with a path separator skips the search and runs as given.
        let program = if name.contains('/') {
            let candidate = PathBuf::from(name);
            PathResolver::is_executable(&candidate).then_some(candidate)
        } else {
            self.resolver.resolve(name, state.search_path())
        };

        let Some(program) = program else {
            writeln!(out, "{}: command not found", name)?;
            return Ok(Outcome::Continue);
        };

        let home = state.home_dir().map(|p| p.to_path_buf());
        self.process_executor
            .run(&program, args, state.current_dir(), home.as_deref())?;
        Ok(Outcome::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    fn empty_state() -> ShellState {
        ShellState::with_env(env::temp_dir(), Vec::new(), None)
    }

    fn output_of(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_line_is_a_no_op() {
        let executor = CommandExecutor::new();
        let mut state = empty_state();
        let mut out = Vec::new();

        let outcome = executor.dispatch(&[], &mut state, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert!(out.is_empty());
    }

    #[test]
    fn test_builtin_command_detection() {
        let executor = CommandExecutor::new();

        for name in BUILTINS {
            assert!(executor.is_builtin(name));
        }
        assert!(!executor.is_builtin("ls"));
        assert!(!executor.is_builtin(""));
    }

    #[test]
    fn test_dispatch_routes_to_builtin() {
        let executor = CommandExecutor::new();
        let mut state = empty_state();
        let mut out = Vec::new();

        let args = vec!["type".to_string(), "echo".to_string()];
        executor.dispatch(&args, &mut state, &mut out).unwrap();
        assert_eq!(output_of(out), "echo is a shell builtin\n");
    }

    #[test]
    fn test_unknown_command_reports_and_continues() {
        let executor = CommandExecutor::new();
        let mut state = empty_state();
        let mut out = Vec::new();

        let args = vec!["zzzznotacommand".to_string()];
        let outcome = executor.dispatch(&args, &mut state, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(output_of(out), "zzzznotacommand: command not found\n");
    }

    #[test]
    fn test_exit_requests_termination() {
        let executor = CommandExecutor::new();
        let mut state = empty_state();
        let mut out = Vec::new();

        let args = vec!["exit".to_string(), "3".to_string()];
        let outcome = executor.dispatch(&args, &mut state, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Exit(3));
    }

    #[test]
    fn test_external_command_runs_from_search_path() {
        let dir = env::temp_dir().join(format!("rill_dispatch_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let script = dir.join("rill-dispatch-probe");
        fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let executor = CommandExecutor::new();
        let mut state = ShellState::with_env(env::temp_dir(), vec![dir.clone()], None);
        let mut out = Vec::new();

        let args = vec!["rill-dispatch-probe".to_string()];
        let outcome = executor.dispatch(&args, &mut state, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert!(out.is_empty());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_path_separator_bypasses_search() {
        let executor = CommandExecutor::new();
        let mut state = empty_state();
        let mut out = Vec::new();

        if PathResolver::is_executable(Path::new("/bin/true")) {
            let args = vec!["/bin/true".to_string()];
            let outcome = executor.dispatch(&args, &mut state, &mut out).unwrap();
            assert_eq!(outcome, Outcome::Continue);
            assert!(out.is_empty());
        }

        let args = vec!["/no/such/binary".to_string()];
        let outcome = executor.dispatch(&args, &mut state, &mut out).unwrap();
        assert_eq!(outcome, Outcome::Continue);
        assert_eq!(output_of(out), "/no/such/binary: command not found\n");
    }

    #[test]
    fn test_tokenized_line_flows_through_dispatch() {
        let executor = CommandExecutor::new();
        let mut state = empty_state();
        let mut out = Vec::new();

        let args = crate::core::lexer::tokenize("echo 'hello    world'");
        executor.dispatch(&args, &mut state, &mut out).unwrap();
        assert_eq!(output_of(out), "hello    world\n");
    }

    #[test]
    fn test_vanished_program_is_a_command_error() {
        let dir = env::temp_dir().join(format!("rill_dispatch_gone_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let script = dir.join("rill-vanishing-probe");
        fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let executor = CommandExecutor::new();
        let resolved = executor
            .resolver
            .resolve("rill-vanishing-probe", &[dir.clone()])
            .unwrap();
        fs::remove_file(&script).unwrap();

        let home: Option<PathBuf> = None;
        let result =
            executor
                .process_executor
                .run(&resolved, &[], &env::temp_dir(), home.as_deref());
        assert!(matches!(
            result,
            Err(ProcessError::SpawnFailed(_, _))
        ));

        fs::remove_dir_all(dir).unwrap();
    }
}
