//! Telegram transport. Long-polls for messages, routes them through the
//! [`ChatBot`], and delivers replies.
//!
//! Every error below the dispatcher is handled in-line: delivery failures get
//! one fixed fallback attempt, polling errors are logged by teloxide and never
//! crash the process.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ChatAction;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::chat::ChatBot;
use crate::commands::Inbound;

/// Telegram has a 4096 character limit per message.
/// We chunk at 4000 to be safe.
const MAX_MESSAGE_LENGTH: usize = 4000;

/// Attempted once when delivering the real reply fails. A second failure is
/// logged and dropped.
const DELIVERY_FALLBACK: &str = "Having some connection issues. Please try again.";

/// Run the long-polling loop until `shutdown` is cancelled.
pub async fn run(token: String, core: Arc<ChatBot>, shutdown: CancellationToken) {
    info!("telegram channel starting");

    let bot = Bot::new(token);

    let handler = Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
        let core = core.clone();
        async move {
            handle_update(&bot, &msg, &core).await;
            respond(())
        }
    });

    let mut dispatcher = Dispatcher::builder(bot, handler).build();

    tokio::select! {
        biased;

        _ = shutdown.cancelled() => {
            info!("shutdown signal received, closing telegram channel");
        }
        _ = dispatcher.dispatch() => {
            warn!("telegram dispatcher exited unexpectedly");
        }
    }
}

async fn handle_update(bot: &Bot, msg: &Message, core: &ChatBot) {
    // Non-text messages (stickers, photos, ...) are ignored.
    let Some(text) = msg.text() else { return };

    let chat_id = msg.chat.id;
    let sender = msg
        .from
        .as_ref()
        .map(|u| u.first_name.clone())
        .unwrap_or_default();

    debug!(chat = chat_id.0, from = %sender, "received message");

    let inbound = Inbound::parse(text);

    if matches!(inbound, Inbound::Chat(_)) {
        // Best-effort typing indicator before the provider round-trip.
        if let Err(e) = bot.send_chat_action(chat_id, ChatAction::Typing).await {
            debug!(chat = chat_id.0, "typing indicator failed: {e}");
        }
    }

    let Some(reply) = core.handle(chat_id.0, &sender, inbound).await else {
        return;
    };

    if let Err(e) = deliver(bot, chat_id, &reply).await {
        warn!(chat = chat_id.0, "failed to deliver reply: {e}");
        if let Err(e) = bot.send_message(chat_id, DELIVERY_FALLBACK).await {
            warn!(chat = chat_id.0, "fallback delivery also failed: {e}");
        }
    }
}

/// Send `text`, chunked at [`MAX_MESSAGE_LENGTH`] characters.
async fn deliver(bot: &Bot, chat_id: ChatId, text: &str) -> Result<(), teloxide::RequestError> {
    let chars: Vec<char> = text.chars().collect();
    for chunk in chars.chunks(MAX_MESSAGE_LENGTH) {
        let chunk_str: String = chunk.iter().collect();
        bot.send_message(chat_id, chunk_str).await?;
    }
    Ok(())
}
