use std::fmt::Write;
use std::io::IsTerminal;

use crate::audit::{AuditOutcome, AuditStats};
use crate::report::Finding;

use super::{ColorMode, ansi};

/// Renders an audit outcome as the line-per-finding text report.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    quiet: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::stdout().is_terminal()),
            verbose,
            quiet: false,
        }
    }

    /// Quiet output lists findings only: no success line, no summary.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub fn format(&self, outcome: &AuditOutcome) -> String {
        let mut output = String::new();
        let findings = outcome.report.findings();

        if !findings.is_empty() {
            let header = self.colorize("Validation errors found:", ansi::RED);
            writeln!(output, "{header}").ok();
            for finding in findings {
                self.format_finding(finding, &mut output);
            }
        }
        if self.quiet {
            return output;
        }

        if findings.is_empty() {
            let line = self.colorize("All detectors and test cases are valid.", ansi::GREEN);
            writeln!(output, "{line}").ok();
        } else {
            writeln!(output).ok();
        }
        writeln!(output, "{}", self.format_summary(findings.len(), &outcome.stats)).ok();
        output
    }

    fn format_finding(&self, finding: &Finding, output: &mut String) {
        writeln!(output, "* {}", finding.message).ok();
        if self.verbose >= 1 {
            let kind = self.colorize(finding.kind.label(), ansi::CYAN);
            writeln!(output, "    {kind} at {}", finding.path.display()).ok();
        }
    }

    fn format_summary(&self, total: usize, stats: &AuditStats) -> String {
        let color = if total == 0 { ansi::GREEN } else { ansi::RED };
        let noun = if total == 1 { "finding" } else { "findings" };
        let count = self.colorize(&total.to_string(), color);
        let checked: Vec<String> = [
            (stats.descriptors, "descriptors"),
            (stats.detectors, "detectors"),
            (stats.test_cases, "test cases"),
            (stats.examples, "examples"),
        ]
        .into_iter()
        .filter_map(|(value, label)| value.map(|n| format!("{n} {label}")))
        .collect();
        if checked.is_empty() {
            format!("Summary: {count} {noun}")
        } else {
            format!("Summary: {count} {noun} ({} checked)", checked.join(", "))
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    #[cfg(test)]
    const fn plain(verbose: u8) -> Self {
        Self {
            use_colors: false,
            verbose,
            quiet: false,
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
