use std::fmt;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    SpawnFailed(String, std::io::Error),
    WaitFailed(std::io::Error),
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::SpawnFailed(program, e) => {
                write!(f, "failed to run {}: {}", program, e)
            }
            ProcessError::WaitFailed(e) => write!(f, "failed to wait for child: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
