//! Codebreaker server - JSON-over-HTTP adapter for the game engine
//!
//! # Architecture
//!
//! - **API**: axum routes for creating games and submitting guesses
//! - **Config**: TOML server configuration with CLI overrides
//! - **CLI**: command-line entry point
//!
//! The game registry is created once and shared with every request handler
//! as router state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod cli;
mod config;

pub use api::{ApiError, GuessRequest, GuessResponse, router};
pub use cli::{Cli, Command};
pub use config::{ConfigError, ServerConfig};
