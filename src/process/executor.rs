use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::ProcessError;
use crate::path::PathExpander;

/// Runs external programs with the caller's terminal.
///
/// The child inherits stdin, stdout and stderr and runs in the session
/// working directory. The call blocks until the child exits.
#[derive(Clone)]
pub struct ProcessExecutor {
    expander: PathExpander,
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessExecutor {
    pub fn new() -> Self {
        ProcessExecutor {
            expander: PathExpander::new(),
        }
    }

    /// Spawns `program` with `args` and waits for it. Returns the child's
    /// exit code; a signal-terminated child reports as -1.
    pub fn run(
        &self,
        program: &Path,
        args: &[String],
        current_dir: &Path,
        home: Option<&Path>,
    ) -> Result<i32, ProcessError> {
        let expanded_args: Vec<PathBuf> = args
            .iter()
            .map(|arg| self.expander.expand(arg, home))
            .collect();

        let mut child = Command::new(program)
            .args(&expanded_args)
            .current_dir(current_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| ProcessError::SpawnFailed(program.display().to_string(), e))?;

        let status = child.wait().map_err(ProcessError::WaitFailed)?;
        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;

    #[test]
    fn test_run_reports_exit_code() {
        let sh = PathBuf::from("/bin/sh");
        if !sh.exists() {
            return;
        }

        let executor = ProcessExecutor::new();
        let status = executor
            .run(
                &sh,
                &["-c".to_string(), "exit 7".to_string()],
                &env::temp_dir(),
                None,
            )
            .unwrap();
        assert_eq!(status, 7);
    }

    #[test]
    fn test_run_success_is_zero() {
        let sh = PathBuf::from("/bin/sh");
        if !sh.exists() {
            return;
        }

        let executor = ProcessExecutor::new();
        let status = executor
            .run(
                &sh,
                &["-c".to_string(), "true".to_string()],
                &env::temp_dir(),
                None,
            )
            .unwrap();
        assert_eq!(status, 0);
    }

    #[test]
    fn test_spawn_failure_is_an_error() {
        let executor = ProcessExecutor::new();
        let result = executor.run(
            Path::new("/definitely/not/a/program"),
            &[],
            &env::temp_dir(),
            None,
        );
        assert!(matches!(result, Err(ProcessError::SpawnFailed(_, _))));
    }
}
