use std::{borrow::Cow, collections::BTreeSet, fs, path::PathBuf};

use rustyline::completion::Pair;

use crate::core::commands::BUILTINS;

/// Completes the command word from the built-in registry plus the
/// executables visible on the session search path.
#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<Cow<'static, str>>,
}

impl CommandCompleter {
    pub fn new(search_path: &[PathBuf]) -> Self {
        let mut commands: BTreeSet<Cow<'static, str>> =
            BUILTINS.iter().map(|name| Cow::Borrowed(*name)).collect();

        for dir in search_path {
            if let Ok(entries) = fs::read_dir(dir) {
                for entry in entries.filter_map(Result::ok) {
                    let is_file = entry
                        .file_type()
                        .map(|t| t.is_file() || t.is_symlink())
                        .unwrap_or(false);
                    if is_file {
                        if let Some(name) = entry.file_name().to_str() {
                            commands.insert(Cow::Owned(name.to_string()));
                        }
                    }
                }
            }
        }

        Self { commands }
    }

    pub fn complete_command(&self, prefix: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect()
    }
}
