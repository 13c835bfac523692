//! Configuration loading: secrets from env, tunables from optional TOML.
//!
//! Secrets (`TELEGRAM_BOT_TOKEN`, `GROQ_API_KEY`) come from the environment
//! only, never from TOML. Tunables are read from `config/bot.toml` when the
//! file exists (path overridable via `JOEY_CONFIG`); a missing file means all
//! defaults. `JOEY_LOG_LEVEL` overrides the configured log level.

use std::{env, fs, io, path::Path};

use serde::Deserialize;

use crate::error::AppError;

/// Completion provider tunables (`[llm]`).
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which backend is active (`"groq"` or `"dummy"`).
    pub provider: String,
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Maximum output token count per reply.
    pub max_tokens: u32,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// Chat behavior tunables (`[chat]`).
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Number of user/assistant pairs kept per chat.
    pub max_history: usize,
}

/// Fully-resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub chat: ChatConfig,
    pub llm: LlmConfig,
    /// From `TELEGRAM_BOT_TOKEN` env var. Required.
    pub telegram_token: String,
    /// From `GROQ_API_KEY` env var. Required unless the provider is keyless.
    pub llm_api_key: Option<String>,
}

/// Secrets handed to the loader. Tests pass values directly instead of
/// mutating env vars.
#[derive(Debug, Default)]
pub struct Secrets {
    pub telegram_token: Option<String>,
    pub llm_api_key: Option<String>,
}

// ── Raw TOML shape ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    chat: RawChat,
    #[serde(default)]
    llm: RawLlm,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            chat: RawChat::default(),
            llm: RawLlm::default(),
        }
    }
}

#[derive(Deserialize)]
struct RawChat {
    #[serde(default = "default_max_history")]
    max_history: usize,
}

#[derive(Deserialize)]
struct RawLlm {
    #[serde(default = "default_llm_provider")]
    provider: String,
    #[serde(default = "default_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_model")]
    model: String,
    #[serde(default = "default_temperature")]
    temperature: f32,
    #[serde(default = "default_max_tokens")]
    max_tokens: u32,
    #[serde(default = "default_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for RawChat {
    fn default() -> Self {
        Self { max_history: default_max_history() }
    }
}

impl Default for RawLlm {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            api_base_url: default_api_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_max_history() -> usize { crate::history::DEFAULT_MAX_HISTORY }
fn default_llm_provider() -> String { "groq".to_string() }
fn default_api_base_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}
fn default_model() -> String { "llama3-8b-8192".to_string() }
fn default_temperature() -> f32 { 0.7 }
fn default_max_tokens() -> u32 { 1024 }
fn default_timeout_seconds() -> u64 { 60 }

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load config from env + optional TOML file.
pub fn load() -> Result<Config, AppError> {
    let path = env::var("JOEY_CONFIG").unwrap_or_else(|_| "config/bot.toml".to_string());
    let secrets = Secrets {
        telegram_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
        llm_api_key: env::var("GROQ_API_KEY").ok(),
    };
    let log_level_override = env::var("JOEY_LOG_LEVEL").ok();
    load_from(Path::new(&path), secrets, log_level_override.as_deref())
}

/// Internal loader, the test seam. A missing file yields defaults; an
/// unreadable or malformed file is a hard error.
pub fn load_from(
    path: &Path,
    secrets: Secrets,
    log_level_override: Option<&str>,
) -> Result<Config, AppError> {
    let parsed: RawConfig = match fs::read_to_string(path) {
        Ok(raw) => toml::from_str(&raw)
            .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => RawConfig::default(),
        Err(e) => {
            return Err(AppError::Config(format!("cannot read {}: {e}", path.display())));
        }
    };

    let telegram_token = secrets
        .telegram_token
        .ok_or_else(|| AppError::Config("TELEGRAM_BOT_TOKEN is not set".into()))?;

    // Only the dummy backend runs without a key; fail fast for everything else.
    if parsed.llm.provider != "dummy" && secrets.llm_api_key.is_none() {
        return Err(AppError::Config("GROQ_API_KEY is not set".into()));
    }

    let log_level = log_level_override.unwrap_or(&parsed.log_level).to_string();
    crate::logger::parse_level(&log_level)
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(Config {
        log_level,
        chat: ChatConfig { max_history: parsed.chat.max_history },
        llm: LlmConfig {
            provider: parsed.llm.provider,
            api_base_url: parsed.llm.api_base_url,
            model: parsed.llm.model,
            temperature: parsed.llm.temperature,
            max_tokens: parsed.llm.max_tokens,
            timeout_seconds: parsed.llm.timeout_seconds,
        },
        telegram_token,
        llm_api_key: secrets.llm_api_key,
    })
}
