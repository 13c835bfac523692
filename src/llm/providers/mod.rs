//! LLM provider implementations.
//!
//! `build(config, api_key)` is the factory, called once at startup.
//! Adding a new backend = new module + new match arm.

pub mod dummy;
pub mod groq;

#[cfg(test)]
pub mod mock;

use crate::config::LlmConfig;
use crate::error::AppError;
use crate::llm::LlmProvider;

/// Construct a `LlmProvider` from config and an optional API key.
///
/// `api_key` is sourced from `GROQ_API_KEY` env (never TOML) and is only
/// optional for the keyless dummy backend. Failures here are configuration
/// problems, not provider round-trip errors.
pub fn build(config: &LlmConfig, api_key: Option<String>) -> Result<LlmProvider, AppError> {
    match config.provider.as_str() {
        "dummy" => Ok(LlmProvider::Dummy(dummy::DummyProvider)),
        "groq" => {
            let key = api_key.ok_or_else(|| AppError::Config("GROQ_API_KEY is not set".into()))?;
            let p = groq::GroqProvider::new(
                config.api_base_url.clone(),
                config.model.clone(),
                config.temperature,
                config.max_tokens,
                config.timeout_seconds,
                key,
            )
            .map_err(|e| AppError::Config(e.to_string()))?;
            Ok(LlmProvider::Groq(p))
        }
        other => Err(AppError::Config(format!("unknown llm provider: {other}"))),
    }
}
