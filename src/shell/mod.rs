use std::io::{self, Write};

use rustyline::{history::FileHistory, Editor};

use crate::{
    core::{
        commands::{CommandExecutor, Outcome},
        lexer,
        state::ShellState,
    },
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::ShellCompleter,
};

/// The interactive session: owns the line editor and the session state,
/// and runs commands one line at a time until `exit` or end-of-input.
pub struct Shell {
    editor: Editor<ShellCompleter, FileHistory>,
    state: ShellState,
    executor: CommandExecutor,
    completer: ShellCompleter,
    highlighter: SyntaxHighlighter,
    flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let state = ShellState::new()?;
        let completer = ShellCompleter::new(&state);

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer.clone()));

        // Keep an idle Ctrl-C from killing the session.
        ctrlc::set_handler(move || {
            println!("\nUse 'exit' to leave the shell");
        })?;

        Ok(Shell {
            editor,
            state,
            executor: CommandExecutor::new(),
            completer,
            highlighter: SyntaxHighlighter::new(),
            flags,
        })
    }

    /// Runs the session and returns its exit status. Only `exit` and
    /// end-of-input get out of the loop; every per-command failure is
    /// reported and the prompt comes back.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            let prompt = format!("{} $ ", self.state.current_dir().display());
            match self.editor.readline(&prompt) {
                Ok(line) => match self.execute_line(&line) {
                    Ok(Outcome::Continue) => self.sync_completer(),
                    Ok(Outcome::Exit(code)) => return Ok(code),
                    Err(e) => {
                        if !self.flags.is_set("quiet") {
                            eprintln!("{}", self.highlighter.highlight_error(&e.to_string()));
                        }
                    }
                },
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    // Drop the half-typed line and re-prompt.
                    continue;
                }
                Err(rustyline::error::ReadlineError::Eof) => return Ok(0),
                Err(e) => {
                    if !self.flags.is_set("quiet") {
                        eprintln!("Error: {}", e);
                    }
                    continue;
                }
            }
        }
    }

    fn execute_line(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let args = lexer::tokenize(line);
        if args.is_empty() {
            return Ok(Outcome::Continue);
        }

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let outcome = self.executor.dispatch(&args, &mut self.state, &mut out)?;
        out.flush()?;
        Ok(outcome)
    }

    /// Path completion follows the session working directory, so the
    /// editor helper is refreshed after a successful `cd`.
    fn sync_completer(&mut self) {
        if self.completer.current_dir() != self.state.current_dir() {
            self.completer
                .set_current_dir(self.state.current_dir().to_path_buf());
            self.editor.set_helper(Some(self.completer.clone()));
        }
    }
}
