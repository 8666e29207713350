use std::path::{Path, PathBuf};

/// Expands a leading tilde against the session home directory.
#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    /// Rewrites `~` and `~/sub` using `home`. Anything else, including
    /// `~user` forms, passes through unchanged; so does everything when no
    /// home directory is known.
    pub fn expand(&self, raw: &str, home: Option<&Path>) -> PathBuf {
        let Some(home) = home else {
            return PathBuf::from(raw);
        };

        if raw == "~" {
            home.to_path_buf()
        } else if let Some(rest) = raw.strip_prefix("~/") {
            home.join(rest)
        } else {
            PathBuf::from(raw)
        }
    }
}
