//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables `SVCGEN_<SECTION>__<KEY>`, e.g.
//!    `SVCGEN_GENERATE__TEMPLATES_DIR`
//! 3. The file passed with `--config` (must exist)
//! 4. `./svcgen.toml`
//! 5. The global `config.toml` in the platform config directory
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::Deserialize;
use svcgen_core::domain::FileKind;

use crate::cli::global::OutputFormat;

/// Project-local configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "svcgen.toml";

const ENV_PREFIX: &str = "SVCGEN";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// What gets generated and where.
    pub generate: GenerateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Kinds generated when `--kind` is not given.
    pub kinds: Vec<String>,
    /// Templates directory; discovered when unset.
    pub templates_dir: Option<PathBuf>,
    /// Root under which `api/` and `cmd/` are created.
    pub output_root: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            kinds: FileKind::ALL.iter().map(|k| k.as_str().to_string()).collect(),
            templates_dir: None,
            output_root: PathBuf::from("."),
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the path the user passed via `--config`; unlike the
    /// global and local files it is required to exist.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let global = Self::config_path();
        Self::load_layers(
            global.as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            config_file,
            environment(),
        )
    }

    fn load_layers(
        global: Option<&Path>,
        local: &Path,
        explicit: Option<&Path>,
        env: Environment,
    ) -> anyhow::Result<Self> {
        let mut builder = Self::defaults()?;

        if let Some(path) = global {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(File::from(local).required(false));
        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        let loaded = builder
            .add_source(env)
            .build()
            .context("failed to read configuration")?;

        loaded
            .try_deserialize()
            .context("invalid configuration values")
    }

    fn defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
        let defaults = Self::default();
        let builder = Config::builder()
            .set_default("generate.kinds", defaults.generate.kinds)?
            .set_default(
                "generate.output_root",
                defaults.generate.output_root.to_string_lossy().into_owned(),
            )?
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("output.format", "auto")?;
        Ok(builder)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness;
    /// `None` when no home directory can be determined.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "svcgen", "svcgen")
            .map(|d| d.config_dir().join("config.toml"))
    }
}

/// `SVCGEN_<SECTION>__<KEY>` variables; `generate.kinds` is comma separated.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("generate.kinds")
        .try_parsing(true)
}
