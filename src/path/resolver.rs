use std::fs;
use std::path::{Path, PathBuf};

/// Locates external programs on the session search path.
///
/// Resolution walks the directories in order and returns the first entry
/// that is a regular file with at least one execute bit set. Directories
/// that cannot be probed are skipped; nothing is cached between calls.
#[derive(Clone)]
pub struct PathResolver;

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, name: &str, search_path: &[PathBuf]) -> Option<PathBuf> {
        search_path.iter().find_map(|dir| {
            let candidate = dir.join(name);
            Self::is_executable(&candidate).then_some(candidate)
        })
    }

    pub fn is_executable(path: &Path) -> bool {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::metadata(path)
                .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
                .unwrap_or(false)
        }
        #[cfg(not(unix))]
        {
            path.is_file()
        }
    }
}
