//! Fatal error output on stderr.
//!
//! Format: `✖ Type: message`, then an optional `× detail` and `help:` line.

use std::io::{IsTerminal, Write};

use crate::error::AuditError;

use super::{ColorMode, ansi};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stderr().is_terminal()),
        }
    }

    /// Prints the error with its category, cause and hint.
    pub fn print(&self, error: &AuditError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    /// Writes the error to a writer (for testing).
    pub fn write_error<W: Write>(&self, w: &mut W, error: &AuditError) {
        let detail = error.detail();
        self.write_parts(
            w,
            error.error_type(),
            &error.message(),
            detail.as_deref(),
            error.suggestion(),
        );
    }

    fn write_parts<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Nothing sensible to do if stderr itself is gone.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

/// Prints an error using the given color mode.
pub fn print_audit_error(error: &AuditError, mode: ColorMode) {
    ErrorOutput::new(mode).print(error);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
