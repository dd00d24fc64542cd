//! Treats any non-command text as an enrollment number or alias and replies with the result.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::service::GradecardService;

pub struct ResultHandler {
    bot: Arc<dyn Bot>,
    service: GradecardService,
}

impl ResultHandler {
    pub fn new(bot: Arc<dyn Bot>, service: GradecardService) -> Self {
        Self { bot, service }
    }
}

#[async_trait]
impl Handler for ResultHandler {
    /// Sends every chunk in order. A failed send aborts the remaining chunks and is returned to the chain.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.is_command() {
            return Ok(HandlerResponse::Continue);
        }

        let chunks = self.service.reply_messages(&message.content).await;
        info!(chunks = chunks.len(), "Sending result");

        for (index, chunk) in chunks.iter().enumerate() {
            if let Err(e) = self.bot.reply_to(message, chunk).await {
                error!(error = %e, chunk = index, "Failed to send result chunk");
                return Err(e);
            }
        }

        Ok(HandlerResponse::Reply(chunks.concat()))
    }
}
