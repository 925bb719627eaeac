//! User-friendly diagnostic messages.
//!
//! Every user-facing error carries the root cause, any relevant context
//! and, where possible, a suggested fix.

use std::fmt;
use std::path::{Path, PathBuf};

use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, NamedSource, SourceSpan};
use thiserror::Error;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when a kit name is unknown.
    pub const LIST_KITS: &str = "Run `kitprops kit list` to see configured kits";

    /// Suggestion when several kits exist and none was chosen.
    pub const SELECT_KIT: &str =
        "Pass `--kit <NAME>` or set `default = \"<NAME>\"` in .kitprops/kits.toml";

    /// Suggestion when no kit file exists at all.
    pub const NO_KITS: &str =
        "Create .kitprops/kits.toml with a [[kit]] table, or pass --kit-file";
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with optional suggestions.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Primary message
    pub message: String,
    /// Severity level
    pub severity: Severity,
    /// Additional context lines
    pub context: Vec<String>,
    /// Suggested fixes
    pub suggestions: Vec<String>,
    /// Related location (file path)
    pub location: Option<PathBuf>,
}

impl Diagnostic {
    fn with_severity(message: impl Into<String>, severity: Severity) -> Self {
        Diagnostic {
            message: message.into(),
            severity,
            context: Vec::new(),
            suggestions: Vec::new(),
            location: None,
        }
    }

    /// Create a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic::with_severity(message, Severity::Error)
    }

    /// Create a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic::with_severity(message, Severity::Warning)
    }

    /// Add context to the diagnostic.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Add a suggestion for fixing the issue.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add a file location.
    pub fn with_location(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = Some(path.into());
        self
    }

    /// Format the diagnostic for terminal output.
    pub fn format(&self, color: bool) -> String {
        let mut output = String::new();

        let severity_str = if color {
            match self.severity {
                Severity::Error => "\x1b[1;31merror\x1b[0m",
                Severity::Warning => "\x1b[1;33mwarning\x1b[0m",
            }
        } else {
            match self.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            }
        };

        output.push_str(&format!("{}: {}\n", severity_str, self.message));

        if let Some(ref path) = self.location {
            output.push_str(&format!("  --> {}\n", path.display()));
        }

        for ctx in &self.context {
            output.push_str(&format!("  = {}\n", ctx));
        }

        if !self.suggestions.is_empty() {
            output.push('\n');
            let help_prefix = if color {
                "\x1b[1;32mhelp\x1b[0m"
            } else {
                "help"
            };
            for suggestion in &self.suggestions {
                output.push_str(&format!("{}: {}\n", help_prefix, suggestion));
            }
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

/// A kit file that is not valid TOML or does not match the kit schema.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("failed to parse kit file: {message}")]
#[diagnostic(
    code(kitprops::config::parse),
    help("Kits are [[kit]] tables with name, sysroot, device-type and a [kit.toolchain] table")
)]
pub struct KitFileParseError {
    pub message: String,
    #[source_code]
    pub src: NamedSource<String>,
    #[label("here")]
    pub span: Option<SourceSpan>,
}

impl KitFileParseError {
    /// Build from a TOML error, pointing at the offending span.
    pub fn from_toml(path: &Path, contents: &str, err: &toml::de::Error) -> Self {
        KitFileParseError {
            message: err.message().to_string(),
            src: NamedSource::new(path.display().to_string(), contents.to_string()),
            span: err.span().map(SourceSpan::from),
        }
    }

    /// Render with source snippet for the terminal.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if GraphicalReportHandler::new()
            .render_report(&mut out, self)
            .is_err()
        {
            out = format!("error: {}\n", self);
        }
        out
    }
}

/// Print a diagnostic to stderr.
pub fn emit(diagnostic: &Diagnostic, color: bool) {
    eprint!("{}", diagnostic.format(color));
}
