use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kaizen_core::{
    database::{PoolSettings, PostgresDatabase},
    seed::reseed_demo_catalog,
};
use kaizen_server::{
    AppState, create_app,
    infra::{
        config::{Config, ConfigLoad, ConfigLoader},
        startup::{ProdStartupHooks, StartupHooks},
    },
};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "kaizen-server")]
#[command(about = "Catalog API for the Kaizen storefront")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to a kaizen.toml (overrides KAIZEN_CONFIG and default locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Db(DbCommand),
    /// Replace the demo products (by slug) and exit
    Seed,
}

#[derive(Debug, Subcommand)]
enum DbCommand {
    /// Apply database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Command::Db(DbCommand::Migrate) => {
                run_db_migrate(&cli.serve).await?;
                return Ok(());
            }
            Command::Seed => {
                run_seed(&cli.serve).await?;
                return Ok(());
            }
        }
    }

    run_server(cli.serve).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<Arc<Config>> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = &args.env_file {
        loader = loader.with_env_file(path);
    }

    let ConfigLoad {
        mut config,
        warnings,
    } = loader.load().context("failed to load configuration")?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = &config.metadata.config_path {
        info!(path = %path.display(), "loaded configuration file");
    }

    for warning in warnings.iter() {
        match &warning.hint {
            Some(hint) => {
                warn!(
                    message = %warning.message,
                    hint = %hint,
                    "configuration warning"
                )
            }
            None => {
                warn!(message = %warning.message, "configuration warning")
            }
        }
    }

    info!(
        database.url = %config.database.redacted_url(),
        database.max_connections = config.database.max_connections,
        cors.allowed_origins = ?config.cors.allowed_origins,
        "configuration in effect"
    );

    Ok(Arc::new(config))
}

async fn connect_database(config: &Config) -> anyhow::Result<PostgresDatabase> {
    let settings = PoolSettings {
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
    };
    PostgresDatabase::new(&config.database.url, settings)
        .await
        .context("failed to connect to PostgreSQL")
}

async fn run_db_migrate(args: &ServeArgs) -> anyhow::Result<()> {
    let config = load_runtime_config(args)?;
    let db = connect_database(&config).await?;
    db.initialize_schema()
        .await
        .context("failed to apply migrations")?;
    info!("Database migrations applied");
    Ok(())
}

async fn run_seed(args: &ServeArgs) -> anyhow::Result<()> {
    let config = load_runtime_config(args)?;
    let db = connect_database(&config).await?;
    db.initialize_schema()
        .await
        .context("failed to apply migrations")?;

    let report = reseed_demo_catalog(&db.products())
        .await
        .context("failed to seed demo catalog")?;
    for product in &report.inserted {
        info!(slug = %product.slug, id = %product.id, "seeded product");
    }
    info!(
        removed = report.removed,
        inserted = report.inserted.len(),
        "seed complete"
    );
    Ok(())
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    run_server_with_hooks(args, &ProdStartupHooks).await
}

async fn run_server_with_hooks<H>(
    args: ServeArgs,
    hooks: &H,
) -> anyhow::Result<()>
where
    H: StartupHooks,
{
    let config = load_runtime_config(&args)?;
    let db = connect_database(&config).await?;
    db.initialize_schema()
        .await
        .context("failed to apply migrations")?;

    let state = AppState::new(Arc::new(db.products()), Arc::clone(&config));
    hooks.run(&state).await?;

    let router = create_app(state);
    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Starting Kaizen catalog API on {addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
