//! Logs each inbound message and how the chain answered it.

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs in before() and after(); never stops the chain.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        match response {
            HandlerResponse::Reply(text) => info!(
                user_id = message.user.id,
                reply_len = text.chars().count(),
                "Replied"
            ),
            other => debug!(user_id = message.user.id, response = ?other, "No reply"),
        }
        Ok(())
    }
}
