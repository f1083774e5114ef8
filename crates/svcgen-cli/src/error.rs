//! Errors surfaced by the `svcgen` binary, their exit codes and the report
//! printed on stderr.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use svcgen_core::error::SvcgenError;

pub use svcgen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// No service name on the command line.
    #[error("missing service name argument")]
    MissingName,

    /// The service name itself was rejected; the message quotes the name.
    #[error(transparent)]
    Core(#[from] SvcgenError),

    /// Generating `name` failed, whether while planning (unknown kind) or
    /// while writing files.
    #[error("failed to create {name} service: {source}")]
    Generation {
        name: String,
        #[source]
        source: SvcgenError,
    },

    /// Configuration could not be loaded or names no kinds.
    #[error("{}configuration error: {message}", service_prefix(.service.as_deref()))]
    Config {
        service: Option<String>,
        message: String,
    },

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

fn service_prefix(service: Option<&str>) -> String {
    service
        .map(|name| format!("failed to create {name} service: "))
        .unwrap_or_default()
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingName => vec![
                "Pass the service name as the only argument".into(),
                "Example: svcgen billing".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::Generation { source, .. } => source.suggestions(),
            Self::Config { .. } => vec![
                "Check the file passed with --config and any svcgen.toml in this directory"
                    .into(),
                "Environment overrides use the form SVCGEN_GENERATE__KINDS=api,main".into(),
            ],
            Self::Io { .. } => vec!["Check that stdout is writable".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName => ErrorCategory::UserError,
            Self::Core(core) | Self::Generation { source: core, .. } => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Error report for a colour terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.report(verbose, true)
    }

    /// Error report without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.report(verbose, false)
    }

    fn report(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {self}\n",
            paint("Error:", |t| t.red().bold().to_string())
        );

        if verbose {
            for cause in self.causes() {
                out.push_str(&format!(
                    "  {} {cause}\n",
                    paint("Caused by:", |t| t.dimmed().to_string())
                ));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |t| t.dimmed().to_string())
            ));
        }

        out
    }

    /// Record the failure in the log before it is reported.
    pub fn log(&self) {
        let code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError => tracing::warn!(code, "rejected: {self}"),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(code, category = ?self.category(), "{self}");
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!("caused by: {source}");
        }
    }

    /// Messages of the source chain, skipping exact repeats.
    fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut previous = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            let message = err.to_string();
            if message != previous {
                causes.push(message.clone());
            }
            previous = message;
            source = err.source();
        }
        causes
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (missing or invalid name, bad arguments).
    UserError,
    /// Configuration error (unknown kind, templates, config files).
    Configuration,
    /// Internal/system error.
    Internal,
}
