pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

pub use toml_config::TextConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "folio-text")]
#[command(about = "Text utilities for the portfolio site")]
#[command(long_about = "Truncate, capitalize, linkify, sanitize and validate portfolio text")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Shorten text to a number of characters
    Truncate {
        /// Text to process; read from stdin when omitted
        text: Option<String>,

        /// Overrides truncate.max_length
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        max_length: Option<i64>,

        /// Overrides truncate.suffix
        #[arg(short, long)]
        suffix: Option<String>,
    },
    /// Uppercase the first letter
    Capitalize { text: Option<String> },
    /// Turn http(s) URLs into anchor tags
    Linkify { text: Option<String> },
    /// Escape HTML-significant characters
    Sanitize { text: Option<String> },
    /// Check an email address; exits with status 1 when invalid
    ValidateEmail { email: Option<String> },
    /// Apply several steps in order
    Pipeline {
        #[arg(long, value_delimiter = ',', required = true)]
        steps: Vec<String>,

        text: Option<String>,
    },
    /// Validate and escape a contact form given as JSON
    Contact {
        /// JSON file holding the form; read from stdin when omitted
        #[arg(short, long)]
        file: Option<String>,
    },
}
