//! Minimal framework config: token, optional API URL and log file path.
//! Loaded from env: BOT_TOKEN (or TELEGRAM_BOT_TOKEN), TELEGRAM_API_URL (or TELOXIDE_API_URL), LOG_FILE.

use anyhow::{Context, Result};
use std::env;
use tracing::info;

/// Minimal Telegram bot config (connectivity and logging only).
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN when given; a token is required either way.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN")
                .or_else(|_| env::var("TELEGRAM_BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// Builds config with the given token; other fields None.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            log_file: None,
        }
    }

    /// Rejects an empty token and an API URL that does not parse.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointing it at `telegram_api_url` when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
                info!(api_url = %url, "Using custom Telegram API URL");
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}
