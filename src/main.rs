use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use items_api::telemetry::{init_tracing, shutdown_signal};
use items_api::web::openapi::openapi_document;
use items_api::{AppConfig, bootstrap};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "items-api", version, about = "JSON-file backed item service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default)
    Serve(ServeArgs),
    /// Print the OpenAPI description to stdout
    Openapi,
}

#[derive(clap::Args, Debug, Default)]
struct ServeArgs {
    /// Address to listen on; overrides ITEMS_BIND_ADDR
    #[arg(long)]
    bind: Option<SocketAddr>,
    /// Backing JSON document; overrides ITEMS_DATA_FILE
    #[arg(long)]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(args).await,
        Command::Openapi => {
            let rendered = serde_json::to_string_pretty(&openapi_document())
                .context("failed to render OpenAPI document")?;
            println!("{rendered}");
            Ok(())
        }
    }
}

async fn serve(args: ServeArgs) -> Result<()> {
    init_tracing();

    let mut config = AppConfig::from_env().context("failed to read config")?;
    if let Some(bind) = args.bind {
        config = config.with_bind_addr(bind);
    }
    if let Some(data_file) = args.data_file {
        config = config.with_data_file(data_file);
    }

    let router = bootstrap(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    info!(addr = %config.bind_addr(), "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("axum serve error")?;

    info!("shut down");
    Ok(())
}
