//! Output formatting module

pub mod json;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::OwoColorize as _;
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let use_colors = !no_color && Term::stdout().is_term() && !no_color_env();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self { styles, quiet }
    }

    /// Print a progress line. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", msg.style(self.styles.info));
        }
    }

    /// Print one listing row. Never suppressed.
    pub fn row(&self, text: &str) {
        println!("{}", text.style(self.styles.bold));
    }

    /// Print `FAILED` followed by the error message on the next line.
    /// Never suppressed.
    pub fn failed(&self, msg: &str) {
        println!("{}", "FAILED".style(self.styles.error));
        println!("{msg}");
    }
}

/// `NO_COLOR` disables colors when set to any non-empty value.
fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}
