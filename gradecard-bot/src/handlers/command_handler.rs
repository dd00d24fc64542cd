//! `/start` and `/help`: send the usage text. Other commands are swallowed without a reply.

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, instrument};

pub const WELCOME_MESSAGE: &str =
    "Welcome! Please enter your enrollment number to get your IGNOU result.";

pub struct CommandHandler {
    bot: Arc<dyn Bot>,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.command() {
            Some("start") | Some("help") => {
                self.bot.reply_to(message, WELCOME_MESSAGE).await?;
                Ok(HandlerResponse::Reply(WELCOME_MESSAGE.to_string()))
            }
            Some(other) => {
                debug!(command = %other, "Ignoring unknown command");
                Ok(HandlerResponse::Stop)
            }
            None => Ok(HandlerResponse::Continue),
        }
    }
}
