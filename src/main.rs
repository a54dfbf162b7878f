use std::net::IpAddr;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use posts_service::{api, config::ServerConfig, store::PostStore};

#[derive(Parser)]
#[command(name = "posts")]
#[command(about = "In-memory CRUD service for posts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "posts_service=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting posts server on {}", config.bind_addr);

    let app = api::create_router(PostStore::new());

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Error opening the server on {}: {}", config.bind_addr, e);
            return Err(e).with_context(|| format!("failed to bind {}", config.bind_addr));
        }
    };
    tracing::info!("Posts server listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.command {
        Some(Commands::Serve { port, host }) => ServerConfig::new(host, port),
        None => ServerConfig::default(),
    };

    serve(config).await
}
