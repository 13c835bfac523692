//! Joey bot entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config, fail fast on missing secrets
//!   3. Init logger at the configured level
//!   4. Build provider, store, chat core
//!   5. Long-poll Telegram until Ctrl+C

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use joey_bot::chat::ChatBot;
use joey_bot::error::AppError;
use joey_bot::history::ConversationStore;
use joey_bot::llm::providers;
use joey_bot::{config, logger, telegram};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present, ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;
    logger::init(&config.log_level)?;

    info!(
        provider = %config.llm.provider,
        model = %config.llm.model,
        max_history = config.chat.max_history,
        "config loaded"
    );

    let provider = providers::build(&config.llm, config.llm_api_key.clone())?;

    let store = Arc::new(ConversationStore::new(config.chat.max_history));
    let core = Arc::new(ChatBot::new(store, provider));

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupt received, shutting down");
            signal_token.cancel();
        }
    });

    println!("Bot is running... Press Ctrl+C to stop.");
    telegram::run(config.telegram_token, core, shutdown).await;

    // Nothing to flush: history is in-memory only.
    Ok(())
}
