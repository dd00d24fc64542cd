//! # Grade card bot
//!
//! Looks up a student's grade card on the university portal by enrollment number (or a
//! configured nickname) and replies with a fixed-width result table.
//!
//! Pipeline: [`alias`] → [`portal`] → [`parser`] → [`report`], wired by [`service`] and exposed
//! to chat through [`handlers`] on top of dbot-core / handler-chain / dbot-telegram.

pub mod alias;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod portal;
pub mod report;
pub mod runner;
pub mod service;

pub use cli::{Cli, Commands};
pub use config::{BotConfig, PortalConfig};
pub use error::{FetchError, LookupError, ParseError, ResolveError};
pub use runner::{build_handler_chain, build_service, lookup_once, run_bot};
pub use service::GradecardService;

// Re-export core so tests and callers need only this crate
pub use dbot_core::{
    init_stderr_tracing, init_tracing, Bot, Chat, DbotError, Handler, HandlerResponse, Message,
    Result, User,
};
pub use handler_chain::HandlerChain;
