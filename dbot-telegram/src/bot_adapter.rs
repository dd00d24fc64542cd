//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, Result};
use teloxide::{prelude::*, types::ChatId};
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        debug!(chat_id = chat.id, len = text.chars().count(), "Sent message");
        Ok(())
    }
}
