//! # dbot-core
//!
//! Core types and traits for the chat bot: [`Bot`], [`Handler`], message and user types,
//! and tracing initialization. Transport-agnostic; used by dbot-telegram and handler-chain.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, Result};
pub use logger::{init_stderr_tracing, init_tracing};
pub use types::{
    Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
};
