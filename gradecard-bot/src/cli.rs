//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gradecard-bot")]
#[command(about = "Grade card Telegram bot: run, lookup", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Fetch one result and print it as the bot would send it. No Telegram token needed.
    Lookup {
        /// Enrollment number or alias.
        input: String,
    },
}
