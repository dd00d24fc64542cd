//! Assembly and entry points: builds the service and handler chain, runs the REPL or a one-off lookup.

use anyhow::Result;
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::alias::{AliasResolver, AliasState};
use crate::config::{BotConfig, PortalConfig};
use crate::handlers::{CommandHandler, LoggingHandler, ResultHandler};
use crate::portal::{PortalClient, ResultSource};
use crate::service::GradecardService;

/// Builds the lookup service from the portal config and alias state.
pub fn build_service(portal: &PortalConfig, aliases: AliasState) -> Result<GradecardService> {
    let source: Arc<dyn ResultSource> = Arc::new(PortalClient::new(portal)?);
    Ok(GradecardService::new(AliasResolver::new(aliases), source))
}

/// Chain order: logging, commands, result lookup.
pub fn build_handler_chain(bot: Arc<dyn Bot>, service: GradecardService) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(bot.clone())))
        .add_handler(Arc::new(ResultHandler::new(bot, service)))
}

/// Main entry: validate config, init logging, load aliases, then run the REPL until the process is stopped.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(Some(config.log_file()))?;

    let aliases = config.alias_state();
    let alias_status = match &aliases {
        AliasState::Loaded(table) => format!("loaded ({} aliases)", table.len()),
        AliasState::Missing => "missing".to_string(),
        AliasState::Invalid(_) => "invalid".to_string(),
    };
    info!(
        portal = %config.portal.base_url,
        program = %config.portal.program,
        aliases = %alias_status,
        "Initializing bot"
    );

    let service = build_service(&config.portal, aliases)?;
    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(bot, service);

    info!("Bot started successfully");
    run_repl(teloxide_bot, handler_chain).await
}

/// Runs the pipeline once and returns the text a chat user would receive.
pub async fn lookup_once(portal: &PortalConfig, aliases: AliasState, input: &str) -> Result<String> {
    portal.validate()?;
    let service = build_service(portal, aliases)?;
    Ok(service.reply_messages(input).await.concat())
}
