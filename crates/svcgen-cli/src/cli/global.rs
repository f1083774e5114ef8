//! Flags that shape how `svcgen` reports, not what it generates.

use std::path::PathBuf;

use clap::Args;
use serde::Deserialize;

/// Logging, colour, configuration and output flags.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` info, `-vv` debug (resolved plans), `-vvv` trace.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print nothing on stdout; errors still go to stderr.
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable ANSI colour. Any non-empty `NO_COLOR` other than a falsey
    /// word (`0`, `false`, `no`, `off`) also disables it.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Read settings from FILE in addition to the usual locations.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How stdout is rendered; defaults to the configured format.
    #[arg(long = "output-format", value_enum, value_name = "FORMAT")]
    pub output_format: Option<OutputFormat>,
}

/// Rendering of stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Markers and colour.
    Human,
    /// Bare lines, stable for scripts.
    Plain,
    /// A single JSON report.
    Json,
}
