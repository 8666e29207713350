use std::env;
use std::path::{Path, PathBuf};

use crate::error::ShellError;

/// Session-scoped state threaded through every command handler.
///
/// The working directory lives here instead of in the process: `cd` and
/// `pwd` operate on this struct, and child processes receive the directory
/// at spawn time. The search path is parsed once at startup and stays fixed
/// for the life of the session.
pub struct ShellState {
    current_dir: PathBuf,
    search_path: Vec<PathBuf>,
    home: Option<PathBuf>,
}

impl ShellState {
    pub fn new() -> Result<Self, ShellError> {
        let current_dir = env::current_dir()?;
        let search_path = env::var_os("PATH")
            .map(|raw| env::split_paths(&raw).collect())
            .unwrap_or_default();

        Ok(ShellState {
            current_dir,
            search_path,
            home: dirs::home_dir(),
        })
    }

    /// Builds a state with explicit values, bypassing the process
    /// environment. Used when embedding and in tests.
    pub fn with_env(
        current_dir: PathBuf,
        search_path: Vec<PathBuf>,
        home: Option<PathBuf>,
    ) -> Self {
        ShellState {
            current_dir,
            search_path,
            home,
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home.as_deref()
    }
}
