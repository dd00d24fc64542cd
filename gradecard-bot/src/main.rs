//! Binary for the grade card bot.

use anyhow::Result;
use clap::Parser;
use gradecard_bot::alias::AliasState;
use gradecard_bot::config::{aliases_from_env, PortalConfig};
use gradecard_bot::{init_stderr_tracing, lookup_once, run_bot, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Lookup { input } => {
            init_stderr_tracing()?;
            let aliases = AliasState::from_config_value(aliases_from_env().as_deref());
            let text = lookup_once(&PortalConfig::from_env(), aliases, &input).await?;
            println!("{}", text);
            Ok(())
        }
    }
}
