//! Console colours
//!
//! A stateless palette: the same message renders coloured or plain
//! depending on how the palette was built.

use crossterm::style::Stylize;

/// Colouring for console output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Palette that emits ANSI colours
    pub const fn colored() -> Self {
        Self { enabled: true }
    }

    /// Palette that leaves text untouched
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Build from a setting
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Confirmation messages
    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    /// Errors and warnings
    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red().to_string())
    }

    /// Prompts that expect a menu choice
    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow().to_string())
    }

    /// Labels and headings
    pub fn strong(&self, text: &str) -> String {
        self.paint(text, |t| t.bold().to_string())
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.enabled {
            style(text)
        } else {
            text.to_string()
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::plain()
    }
}
