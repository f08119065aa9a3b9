//! Two-column progress output: a padded label followed by a wrapped message.

use colored::{Color, Colorize};

use crate::constants::{LABEL_WIDTH, WRAP_WIDTH};

/// Sink for user-facing progress lines.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    enabled: bool,
}

impl Console {
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// A console that drops every line.
    pub fn silent() -> Self {
        Self { enabled: false }
    }

    /// Prints `message` under `label` in the default colors.
    pub fn log(&self, label: &str, message: &str) {
        self.log_styled(label, message, Color::Green, Color::Cyan);
    }

    pub fn log_styled(
        &self,
        label: &str,
        message: &str,
        label_color: Color,
        message_color: Color,
    ) {
        if !self.enabled {
            return;
        }
        println!("{}", render_line(label, message, label_color, message_color));
    }

    /// Echoes raw command output, dimmed.
    pub fn echo(&self, text: &str, color: Color) {
        if self.enabled && !text.is_empty() {
            println!("{}", text.color(color).dimmed());
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

fn render_line(
    label: &str,
    message: &str,
    label_color: Color,
    message_color: Color,
) -> String {
    format!(
        "{}{}",
        right_pad(label, LABEL_WIDTH).color(label_color),
        wrap(message, LABEL_WIDTH, WRAP_WIDTH).color(message_color)
    )
}

/// Pads `s` with spaces up to `len` characters.
pub fn right_pad(s: &str, len: usize) -> String {
    format!("{s:<len$}")
}

/// Wraps `text` so every line spans columns `start..stop`.
///
/// Continuation lines are indented by `start` spaces, the first line is not,
/// so the result can follow a label of width `start`. Words longer than the
/// column are kept whole on their own line.
pub fn wrap(text: &str, start: usize, stop: usize) -> String {
    let width = stop.saturating_sub(start).max(1);
    let indent = " ".repeat(start);
    let mut lines: Vec<String> = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() { word.len() } else { line.len() + 1 + word.len() };
            if !line.is_empty() && needed > width {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }

    lines
        .iter()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
