//! Conversation handlers, in chain order: logging, commands, result lookup.

mod command_handler;
mod logging_handler;
mod result_handler;

pub use command_handler::{CommandHandler, WELCOME_MESSAGE};
pub use logging_handler::LoggingHandler;
pub use result_handler::ResultHandler;
