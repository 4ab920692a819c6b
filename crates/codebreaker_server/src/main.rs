//! Codebreaker server binary.

use anyhow::Result;
use clap::Parser;
use codebreaker::GameRegistry;
use codebreaker_server::{Cli, Command, ServerConfig, router};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = ServerConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Serve { host, port } => serve(config.with_overrides(host, port)).await,
        Command::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

/// Run the HTTP game server until Ctrl+C.
#[instrument(skip_all, fields(host = %config.host(), port = config.port()))]
async fn serve(config: ServerConfig) -> Result<()> {
    let registry = GameRegistry::with_limits(*config.limits());
    info!(limits = ?registry.limits(), "Starting codebreaker server");
    let app = router(registry);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}:{}/", config.host(), config.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,codebreaker=debug,codebreaker_server=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
