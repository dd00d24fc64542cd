//! Outbound side of the transport.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it with teloxide and tests
//! substitute a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Sends text to a chat. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat. Callers keep `text` within the transport limit.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
