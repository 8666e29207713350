use std::{
    fs,
    path::{Path, PathBuf},
};

use rustyline::completion::Pair;

/// Completes argument words as filesystem paths. Relative candidates are
/// resolved against the session working directory, not the process cwd.
#[derive(Clone)]
pub struct PathCompleter {
    base: PathBuf,
}

impl PathCompleter {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn set_base(&mut self, base: PathBuf) {
        self.base = base;
    }

    pub fn complete_path(&self, incomplete: &str) -> Vec<Pair> {
        let (dir_part, prefix) = match incomplete.rsplit_once('/') {
            Some(("", file)) => ("/".to_string(), file.to_string()),
            Some((dir, file)) => (format!("{}/", dir), file.to_string()),
            None => (String::new(), incomplete.to_string()),
        };

        let search_dir = if dir_part.is_empty() {
            self.base.clone()
        } else if dir_part.starts_with('/') {
            PathBuf::from(&dir_part)
        } else {
            self.base.join(&dir_part)
        };

        let mut matches = Vec::new();
        if let Ok(entries) = fs::read_dir(&search_dir) {
            for entry in entries.filter_map(Result::ok) {
                if let Some(name) = entry.file_name().to_str() {
                    if name.starts_with(&prefix) {
                        let candidate = if entry.path().is_dir() {
                            format!("{}{}/", dir_part, name)
                        } else {
                            format!("{}{}", dir_part, name)
                        };
                        matches.push(Pair {
                            display: candidate.clone(),
                            replacement: candidate,
                        });
                    }
                }
            }
        }

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}
