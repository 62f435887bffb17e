//! Configuration types for mmquery.
//!
//! [`Config::load`] reads `~/.config/mmquery/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist, then applies `MMQUERY_*`
//! environment overrides. [`Config::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[model]
provider          = "gemini"
name              = "gemini-2.5-flash"
temperature       = 0.0
max_output_tokens = 256
timeout_secs      = 15
api_key_env       = "GEMINI_API_KEY"
"#;

const ENV_PREFIX: &str = "MMQUERY";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/mmquery/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
}

/// Which model backend translates queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Gemini,
    /// Any server speaking the OpenAI chat-completions protocol.
    #[serde(alias = "openai-compatible")]
    OpenAi,
    /// No model; always use the rule-based translator.
    None,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Gemini => write!(f, "gemini"),
            Provider::OpenAi => write!(f, "openai"),
            Provider::None => write!(f, "none"),
        }
    }
}

/// `[model]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_provider")]
    pub provider: Provider,
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Overrides the backend's public endpoint.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Replaces the embedded instruction document.
    #[serde(default)]
    pub instructions_path: Option<PathBuf>,
}

fn default_provider() -> Provider { Provider::Gemini }
fn default_name() -> String { "gemini-2.5-flash".to_string() }
fn default_max_output_tokens() -> u32 { 256 }
fn default_timeout_secs() -> u64 { 15 }
fn default_api_key_env() -> String { "GEMINI_API_KEY".to_string() }

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            name: default_name(),
            temperature: 0.0,
            max_output_tokens: default_max_output_tokens(),
            timeout_secs: default_timeout_secs(),
            api_key_env: default_api_key_env(),
            base_url: None,
            instructions_path: None,
        }
    }
}

impl ModelConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read the API key from the configured environment variable. Empty
    /// values count as unset.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/mmquery/config.toml`, layered on top of the
    /// built-in defaults and under `MMQUERY_*` environment overrides. Creates
    /// the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_or_create(&config_path(), environment())
    }

    /// Like [`load`](Self::load) for an explicit path and environment.
    ///
    /// Writing the default file is best-effort. If `path` cannot be parsed,
    /// the file layer is skipped and `env` still applies on top of the
    /// defaults. Only a bad environment value is an error.
    pub fn load_or_create(path: &Path, env: config::Environment) -> anyhow::Result<Self> {
        if !path.exists() {
            match write_defaults(path) {
                Ok(()) => tracing::debug!(path = %path.display(), "config: wrote defaults"),
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "config: could not write defaults"
                ),
            }
        }

        Self::load_from(path, env.clone()).or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "config: ignoring unreadable file");
            Self::defaults_with(env)
        })
    }

    /// Load from an explicit file and environment source. The file is
    /// optional; a missing file yields the defaults plus `env`.
    pub fn load_from(path: &Path, env: config::Environment) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Built-in defaults plus `env`, with no file layer.
    pub fn defaults_with(env: config::Environment) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(env)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

/// `MMQUERY_<SECTION>__<KEY>` environment source, e.g. `MMQUERY_MODEL__PROVIDER=none`.
pub fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn write_defaults(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG.trim_start())
}

/// Location of the user config file.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("mmquery")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
