//! Output management and formatting.
//!
//! Human and plain output go line by line to stdout. JSON output replaces
//! all of it with a single document written by [`OutputManager::json`].
//! Errors are not printed here; `main` writes them to stderr.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

#[derive(Debug, Clone, Copy)]
enum Tone {
    Plain,
    Success,
    Warning,
    Info,
    Header,
}

/// Manages CLI output based on flags and configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = args.output_format.unwrap_or(config.output.format);
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet and JSON modes.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Plain, msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Success, msg)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Warning, msg)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(Tone::Info, msg)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        self.emit(Tone::Header, text)
    }

    /// Write `value` as one pretty-printed JSON document.
    ///
    /// No-op unless the resolved format is JSON, or when quiet.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.quiet || !self.is_json() {
            return Ok(());
        }
        let doc = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&doc)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` when stdout is reserved for a JSON document.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    fn emit(&self, tone: Tone, msg: &str) -> io::Result<()> {
        match self.render(tone, msg) {
            Some(line) => self.term.write_line(&line),
            None => Ok(()),
        }
    }

    /// The exact line `tone` produces for `msg`, or `None` when suppressed.
    ///
    /// Plain output carries no markers so scripts can match lines exactly.
    fn render(&self, tone: Tone, msg: &str) -> Option<String> {
        if self.quiet || self.is_json() {
            return None;
        }

        if self.resolved_format == OutputFormat::Plain {
            return Some(msg.to_owned());
        }

        let marker = match tone {
            Tone::Plain | Tone::Header => None,
            Tone::Success => Some("\u{2713}"), // ✓
            Tone::Warning => Some("\u{26a0}"), // ⚠
            Tone::Info => Some("\u{2139}"),    // ℹ
        };

        let line = match (marker, self.no_color) {
            (None, true) => msg.to_owned(),
            (Some(m), true) => format!("{m} {msg}"),
            (_, false) => match tone {
                Tone::Plain => msg.to_owned(),
                Tone::Header => msg.cyan().bold().to_string(),
                Tone::Success => format!("{} {}", "\u{2713}".green().bold(), msg.green()),
                Tone::Warning => format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow()),
                Tone::Info => format!("{} {}", "\u{2139}".blue().bold(), msg.blue()),
            },
        };
        Some(line)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
