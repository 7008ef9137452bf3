//! Configuration loading and validation.
//!
//! Everything is an explicit value passed into components at construction
//! time — no process-wide globals. An absent config file means defaults,
//! so the binary runs against a stock local Ollama with no setup.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Ollama endpoint and model settings.
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// Document condensation settings.
    #[serde(default)]
    pub condense: CondenseConfig,
}

/// Ollama endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier passed to the chat API (e.g. "llama3:8b").
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout in seconds. A hung call must not block forever.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Document condensation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CondenseConfig {
    /// Documents shorter than this (in characters) pass through untouched.
    #[serde(default = "default_threshold_chars")]
    pub threshold_chars: usize,

    /// Chunk size budget in characters for the splitter.
    #[serde(default = "default_chunk_chars")]
    pub chunk_chars: usize,

    /// Prefix length kept when a chunk summarization falls back to truncation.
    #[serde(default = "default_fallback_prefix_chars")]
    pub fallback_prefix_chars: usize,

    /// Maximum concurrent chunk summarization calls.
    #[serde(default = "default_workers")]
    pub workers: usize,
}

impl Default for CondenseConfig {
    fn default() -> Self {
        Self {
            threshold_chars: default_threshold_chars(),
            chunk_chars: default_chunk_chars(),
            fallback_prefix_chars: default_fallback_prefix_chars(),
            workers: default_workers(),
        }
    }
}

// Default value functions for serde

fn default_base_url() -> String {
    "http://127.0.0.1:11434".to_owned()
}
fn default_model() -> String {
    "llama3:8b".to_owned()
}
fn default_request_timeout_secs() -> u64 {
    120
}
fn default_threshold_chars() -> usize {
    12_000
}
fn default_chunk_chars() -> usize {
    8_000
}
fn default_fallback_prefix_chars() -> usize {
    1_000
}
fn default_workers() -> usize {
    4
}

/// Load the config from a TOML file, or defaults if the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read config at {}: {e}", path.display()))?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("failed to parse config at {}: {e}", path.display()))?;
    Ok(config)
}

/// Resolve the default config directory (`~/.synthesis/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.home_dir().join(".synthesis"))
}
