//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// Failure banner (red, bold)
    pub error: Style,
    /// Progress lines (cyan)
    pub info: Style,
    /// Listing rows (bold)
    pub bold: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.error = Style::new().red().bold();
        self.info = Style::new().cyan();
        self.bold = Style::new().bold();
    }
}
