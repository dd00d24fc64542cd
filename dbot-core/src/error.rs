//! Error type for the bot core.

use thiserror::Error;

/// Top-level error for dbot. Transport failures surface as [`DbotError::Bot`].
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
