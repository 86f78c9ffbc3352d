//! Terminal styling and color detection for text output.

use std::io::IsTerminal;

/// ANSI escape codes used by the text renderer.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for node names in headers.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for step numbers and coordinates.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for stair and lift steps.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for totals.
    pub const GREEN: &str = "\x1b[32m";
}

/// Resolved color codes, either ANSI sequences or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
        }
    }

    /// Colored when stdout is a terminal that accepts ANSI codes, plain otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() && supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

/// Check whether ANSI color codes should be emitted.
///
/// Honors `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
