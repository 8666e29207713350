use inksac::prelude::*;

use crate::core::commands::BUILTINS;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    /// Styles the command word (green for built-ins, cyan otherwise) and
    /// option-looking words in yellow.
    pub fn highlight_line(&self, input: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return input.to_string();
        }

        let mut parts: Vec<String> = input.split_whitespace().map(String::from).collect();
        if parts.is_empty() {
            return input.to_string();
        }

        let command_color = if BUILTINS.contains(&parts[0].as_str()) {
            Color::Green
        } else {
            Color::Cyan
        };
        let command_style = Style::builder().foreground(command_color).bold().build();
        parts[0] = parts[0].clone().style(command_style).to_string();

        for part in parts.iter_mut().skip(1) {
            if part.starts_with('-') {
                let flag_style = Style::builder().foreground(Color::Yellow).build();
                *part = part.clone().style(flag_style).to_string();
            }
        }

        parts.join(" ")
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();
        hint.style(hint_style).to_string()
    }
}
