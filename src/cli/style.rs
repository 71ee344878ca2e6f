//! Terminal styling helpers
//!
//! Styles always emit ANSI codes; `anstream` strips them when stdout is not a
//! terminal or colors are disabled.

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Style, Styled};
use std::fmt::Display;

/// Check mark glyph
pub const CHECK: &str = "✓";
/// Cross glyph
pub const CROSS: &str = "✗";
/// Warning glyph
pub const WARN: &str = "⚠";

/// Semantic styles for any displayable value
pub trait Stylize: Display + Sized {
    /// De-emphasized text
    fn muted(&self) -> Styled<&Self> {
        self.style(Style::new().dimmed())
    }

    /// Headings and labels
    fn emphasis(&self) -> Styled<&Self> {
        self.style(Style::new().bold())
    }

    /// Names, numbers, titles
    fn accent(&self) -> Styled<&Self> {
        self.style(Style::new().cyan())
    }

    /// Success messages
    fn success(&self) -> Styled<&Self> {
        self.style(Style::new().green())
    }

    /// Warnings
    fn warn(&self) -> Styled<&Self> {
        self.style(Style::new().yellow())
    }

    /// Errors
    fn error(&self) -> Styled<&Self> {
        self.style(Style::new().red().bold())
    }
}

impl<T: Display> Stylize for T {}

/// Green check mark
pub fn check() -> String {
    CHECK.success().to_string()
}

/// Red cross
pub fn cross() -> String {
    CROSS.error().to_string()
}

/// Arrow used between old and new values
pub fn arrow() -> String {
    "→".muted().to_string()
}

/// Spinner style shared by all commands
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "])
}

/// Render `text` as a terminal hyperlink to `url` where supported
pub fn hyperlink(text: &str, url: &str) -> String {
    if supports_hyperlinks::on(supports_hyperlinks::Stream::Stdout) {
        terminal_link::Link::new(text, url).to_string()
    } else {
        text.to_string()
    }
}
