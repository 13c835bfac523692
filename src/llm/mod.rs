//! LLM provider abstraction.
//!
//! `LlmProvider` is an enum over concrete provider implementations.
//! Add a new variant + module in `providers/` for each additional backend.
//!
//! Provider instances are shared immutable capabilities, clone them freely.
//! Enum dispatch avoids `dyn` trait objects and the `async-trait` dependency.

pub mod providers;

use thiserror::Error;

use crate::history::Turn;

// ── Error ─────────────────────────────────────────────────────────────────────

/// Failures of a single completion round-trip. Backend selection problems
/// are config-stage errors and belong to [`crate::error::AppError`].
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTP 429 from the completion API. Mapped to its own user-facing
    /// fallback; everything else falls under [`ProviderError::Request`].
    #[error("provider rate limited: {0}")]
    RateLimited(String),
    #[error("provider request failed: {0}")]
    Request(String),
}

// ── Provider enum ─────────────────────────────────────────────────────────────

/// All available provider backends.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    Groq(providers::groq::GroqProvider),
    Dummy(providers::dummy::DummyProvider),
    #[cfg(test)]
    Mock(providers::mock::MockProvider),
}

impl LlmProvider {
    /// Send the full message payload (system + history + new user turn) and
    /// return the reply text. `Ok(None)` means the call succeeded but the
    /// first choice carried empty or absent content.
    pub async fn complete(&self, messages: &[Turn]) -> Result<Option<String>, ProviderError> {
        match self {
            LlmProvider::Groq(p) => p.complete(messages).await,
            LlmProvider::Dummy(p) => p.complete(messages).await,
            #[cfg(test)]
            LlmProvider::Mock(p) => p.complete(messages).await,
        }
    }
}
