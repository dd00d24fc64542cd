//! Bot configuration: Telegram connectivity, portal location, alias table. Loaded from env.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use std::env;

use crate::alias::AliasState;

pub const DEFAULT_LOG_FILE: &str = "logs/gradecard-bot.log";
pub const DEFAULT_PORTAL_BASE_URL: &str = "https://gradecard.ignou.ac.in";
pub const DEFAULT_PROGRAM: &str = "BCA";
pub const DEFAULT_RESULT_TYPE: &str = "1";

/// Env var holding the alias table as a JSON object of nickname → enrollment number.
pub const ALIASES_ENV: &str = "ENROLLMENT_ALIASES";

/// Where grade cards are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// PORTAL_BASE_URL
    pub base_url: String,
    /// PORTAL_PROGRAM, sent as `prog`
    pub program: String,
    /// PORTAL_RESULT_TYPE, sent as `type`
    pub result_type: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PORTAL_BASE_URL.to_string(),
            program: DEFAULT_PROGRAM.to_string(),
            result_type: DEFAULT_RESULT_TYPE.to_string(),
        }
    }
}

impl PortalConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("PORTAL_BASE_URL").unwrap_or(defaults.base_url),
            program: env::var("PORTAL_PROGRAM").unwrap_or(defaults.program),
            result_type: env::var("PORTAL_RESULT_TYPE").unwrap_or(defaults.result_type),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("PORTAL_BASE_URL is not a valid URL: {}", self.base_url);
        }
        Ok(())
    }
}

/// Raw alias configuration value from the environment, if any.
pub fn aliases_from_env() -> Option<String> {
    env::var(ALIASES_ENV).ok()
}

/// Full configuration for the `run` command.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub portal: PortalConfig,
    /// Unparsed alias table; see [`BotConfig::alias_state`].
    pub aliases_raw: Option<String>,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        Ok(Self {
            telegram: TelegramConfig::from_env(token)?,
            portal: PortalConfig::from_env(),
            aliases_raw: aliases_from_env(),
        })
    }

    pub fn log_file(&self) -> &str {
        self.telegram.log_file.as_deref().unwrap_or(DEFAULT_LOG_FILE)
    }

    /// Parses the alias table. Malformed or missing input is not an error here.
    pub fn alias_state(&self) -> AliasState {
        AliasState::from_config_value(self.aliases_raw.as_deref())
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.portal.validate()
    }
}
