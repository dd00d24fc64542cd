//! REPL runner: converts teloxide messages to core::Message and passes them to HandlerChain.

use anyhow::Result;
use dbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling with the given teloxide Bot and HandlerChain.
///
/// Each text message is converted to core::Message and handled in its own spawned task, so a
/// slow handler only delays its own chat. Chain errors are logged and never reach teloxide.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.user.username.as_deref().unwrap_or("unknown"),
            "Connected to Telegram"
        ),
        Err(e) => error!(error = %e, "getMe failed; continuing with polling"),
    }

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            if msg.text().is_none() {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Ignoring non-text message"
                );
                return Ok(());
            }

            tokio::spawn(async move {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "step: processing message (handler chain started)"
                );
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
