//! bookshelf: serve a single-table book catalog over HTTP

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bookshelf_server::db;
use bookshelf_server::http::server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(name = "bookshelf", version, about = "HTTP service for book records")]
struct Cli {
    /// Port to bind the HTTP server to
    #[arg(short, long, default_value_t = 3030)]
    port: u16,

    /// Bind address
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// Path to the SQLite database file (default: ~/.bookshelf/books.db)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Allow requests from any origin
    #[arg(long)]
    cors_permissive: bool,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn default_db_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".bookshelf").join("books.db"))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().ok();
    let cli = Cli::parse();

    let db_path = cli
        .db_path
        .or_else(default_db_path)
        .context("could not determine a database path; pass --db-path")?;

    tracing::info!("Opening database at {}", db_path.display());
    let pool = db::connect(&db_path).await?;

    let bind_addr: SocketAddr = format!("{}:{}", cli.bind, cli.port)
        .parse()
        .context("invalid bind address")?;

    let config = ServerConfig {
        bind_addr,
        cors_permissive: cli.cors_permissive,
    };

    run_server(pool, config).await?;
    Ok(())
}
