//! Command-line interface for the codebreaker server.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Codebreaker - Mastermind-style game server
#[derive(Parser, Debug)]
#[command(name = "codebreaker_server")]
#[command(about = "Code-breaking game server with a JSON API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(
        short,
        long,
        global = true,
        default_value = "codebreaker.toml",
        env = "CODEBREAKER_CONFIG"
    )]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Host to bind to (overrides the config file)
        #[arg(long, env = "CODEBREAKER_HOST")]
        host: Option<String>,

        /// Port to bind to (overrides the config file)
        #[arg(short, long, env = "CODEBREAKER_PORT")]
        port: Option<u16>,
    },

    /// Print the effective configuration and exit
    ShowConfig,
}
