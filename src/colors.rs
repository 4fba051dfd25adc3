use std::fmt::Display;
use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";

/// Role of a piece of terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Error,
    /// A file was created or rewritten
    Written,
    /// The file already matched the generated document
    UpToDate,
    /// `--check` found the file missing or different
    Stale,
    DiffRemoved,
    DiffAdded,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Error | Tone::DiffRemoved => "\x1b[31m", // Red
            Tone::Written | Tone::DiffAdded => "\x1b[32m", // Green
            Tone::Stale => "\x1b[33m",                     // Yellow
            Tone::UpToDate => "\x1b[36m",                  // Cyan
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Wrap `text` in the escape codes for `tone`, or return it as-is when disabled.
    pub fn paint(&self, tone: Tone, text: impl Display) -> String {
        if self.enabled {
            format!("{}{text}{RESET}", tone.ansi())
        } else {
            text.to_string()
        }
    }
}

/// Decide whether to color output.
///
/// Priority: `--no-color` > `--color` > `NO_COLOR` env > TTY detection
pub fn should_use_colors(force_color: bool, no_color: bool) -> bool {
    if no_color {
        return false;
    }
    if force_color {
        return true;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    io::stdout().is_terminal()
}
