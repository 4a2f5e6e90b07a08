//! Incident server entry point

mod config;

use anyhow::Context;
use clap::Parser;
use config::{AppConfig, DatabaseConfig, LoggingConfig};
use incident_service::IncidentServiceModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::PathBuf;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Parser)]
#[command(name = "incident-server", version, about = "Incident reporting HTTP server")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override server.bind_addr
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("incident-server error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = AppConfig::load(cli.config.as_deref())?;
    if let Some(bind) = cli.bind {
        cfg.server.bind_addr = bind;
    }

    if cli.print_config {
        print!("{}", serde_yaml::to_string(&cfg)?);
        return Ok(());
    }

    init_tracing(&cfg.logging)?;

    let db = connect(&cfg.database).await?;

    let module = Arc::new(IncidentServiceModule::new(cfg.incidents.clone()));
    module
        .init(Arc::new(db))
        .await
        .context("failed to initialize incident service")?;

    let listener = tokio::net::TcpListener::bind(&cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;

    let cancel = CancellationToken::new();
    tokio::spawn(shutdown_on_ctrl_c(cancel.clone()));

    module.serve(listener, cancel).await
}

fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

async fn connect(database: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database.url.clone());
    options
        .max_connections(database.max_connections)
        .connect_timeout(database.connect_timeout)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .context("failed to connect to database")?;

    tracing::info!(max_connections = database.max_connections, "database connected");
    Ok(db)
}

async fn shutdown_on_ctrl_c(cancel: CancellationToken) {
    if let Err(error) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server runs until killed
        tracing::warn!(%error, "failed to listen for ctrl-c");
        return;
    }
    tracing::info!("shutdown requested");
    cancel.cancel();
}
