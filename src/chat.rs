//! Message orchestration: one inbound message in, at most one reply out.
//!
//! Commands short-circuit against the store and never touch the provider.
//! Chat messages become a provider payload of system prompt + history + the
//! new user turn; the exchange is only recorded in history when the provider
//! call itself succeeded, so a failed turn never pollutes future prompts with
//! text the model never produced.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::commands::{self, Inbound};
use crate::history::{ConversationStore, Turn};
use crate::llm::{LlmProvider, ProviderError};
use crate::prompt;

/// Substituted (and recorded) when the provider succeeds with empty content.
pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm having trouble processing that. Could you try again?";
/// Returned when the provider reports a rate limit. Not recorded.
pub const RATE_LIMIT_FALLBACK: &str =
    "I'm getting too many messages right now. Let's take a short break.";
/// Returned on any other provider failure. Not recorded.
pub const GENERIC_FALLBACK: &str =
    "Sorry, there seems to be a server issue. Please try again in a moment.";

/// The chat core: owns the conversation store and the provider handle.
/// Constructed once in `main`; the transport holds it behind an `Arc`.
pub struct ChatBot {
    store: Arc<ConversationStore>,
    provider: LlmProvider,
}

impl ChatBot {
    pub fn new(store: Arc<ConversationStore>, provider: LlmProvider) -> Self {
        Self { store, provider }
    }

    /// Handle one classified inbound message. `None` means no reply is sent.
    pub async fn handle(&self, chat_id: i64, sender_name: &str, inbound: Inbound) -> Option<String> {
        match inbound {
            Inbound::Start => {
                self.store.clear(chat_id);
                Some(commands::WELCOME_TEXT.to_string())
            }
            Inbound::Help => Some(commands::HELP_TEXT.to_string()),
            Inbound::Clear => {
                self.store.clear(chat_id);
                Some(commands::CLEAR_TEXT.to_string())
            }
            Inbound::Unknown => {
                debug!(chat_id, "ignoring unrecognised command");
                None
            }
            Inbound::Chat(text) => Some(self.exchange(chat_id, sender_name, &text).await),
        }
    }

    /// One orchestrated exchange: history snapshot, provider round-trip,
    /// conditional history update.
    async fn exchange(&self, chat_id: i64, sender_name: &str, text: &str) -> String {
        let mut messages = vec![Turn::system(prompt::system_prompt(sender_name))];
        messages.extend(self.store.history(chat_id));
        messages.push(Turn::user(text));

        match self.provider.complete(&messages).await {
            Ok(content) => {
                let reply = content.unwrap_or_else(|| EMPTY_REPLY_FALLBACK.to_string());
                self.store.append_pair(chat_id, text, &reply);
                reply
            }
            Err(ProviderError::RateLimited(e)) => {
                warn!(chat_id, error = %e, "provider rate limited");
                RATE_LIMIT_FALLBACK.to_string()
            }
            Err(e) => {
                warn!(chat_id, error = %e, "provider call failed");
                GENERIC_FALLBACK.to_string()
            }
        }
    }
}
