//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser};

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "svcgen",
    bin_name = "svcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate the OpenAPI spec and entrypoint stubs for a new service",
    long_about = "svcgen validates a service name and renders the service templates \
                  into api/<name>.yml and cmd/<name>/main.go.",
    after_help = "EXAMPLES:\n\
        \x20 svcgen billing\n\
        \x20 svcgen billing --kind api\n\
        \x20 svcgen billing --templates-dir ./tools/generate-service/templates --dry-run\n\
        \x20 svcgen -v users --output ../monorepo",
)]
pub struct Cli {
    /// Logging, colour and output flags.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// What to generate.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Arguments for generating a service.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Service name: lowercase, no underscores or hyphens.
    ///
    /// Optional at the parser level so a missing name is reported by svcgen
    /// itself rather than as a usage error.
    #[arg(value_name = "NAME", help = "Service name, e.g. billing")]
    pub name: Option<String>,

    /// File kinds to generate, in order.
    #[arg(
        short = 'k',
        long = "kind",
        value_name = "KIND",
        help = "File kind to generate (api, main); repeatable, defaults to config"
    )]
    pub kinds: Vec<String>,

    /// Directory holding `openapi.yml.tmpl` and `main.go.tmpl`.
    #[arg(
        short = 't',
        long = "templates-dir",
        value_name = "DIR",
        help = "Templates directory"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Root under which `api/` and `cmd/` are created.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output root directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}
