//! Joey, a Telegram chat assistant backed by the Groq completion API.
//!
//! Pipeline: inbound Telegram message → [`commands::Inbound`] classification
//! → [`chat::ChatBot`] orchestration over the [`history::ConversationStore`]
//! and an [`llm::LlmProvider`] backend → reply via [`telegram`].

pub mod chat;
pub mod commands;
pub mod config;
pub mod error;
pub mod history;
pub mod llm;
pub mod logger;
pub mod prompt;
pub mod telegram;
