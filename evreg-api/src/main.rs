use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

mod handlers;
mod models;
mod server;
mod state;

use evreg_core::storage::{CsvStorage, DatabaseStorage, Storage};

#[derive(Parser)]
#[command(name = "evreg-api")]
#[command(about = "HTTP API server for event registrations")]
#[command(version = "0.1.0")]
struct Cli {
    /// Port to run the server on
    #[arg(short, long, default_value = "5000")]
    port: u16,

    /// Storage backend that receives registrations
    #[arg(long, value_enum, default_value = "csv")]
    storage: StorageBackend,

    /// Target file for the csv backend
    #[arg(long, default_value = "registrations.csv")]
    csv_path: PathBuf,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum StorageBackend {
    /// Append rows to a local CSV file
    Csv,
    /// Insert documents into Turso/libSQL
    Database,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt::init();

    println!(
        "🚀 Starting event registration API server on port {}...",
        cli.port
    );

    let storage: Arc<dyn Storage> = match cli.storage {
        StorageBackend::Csv => {
            info!("Using CSV storage at {}", cli.csv_path.display());
            Arc::new(CsvStorage::new(&cli.csv_path))
        }
        StorageBackend::Database => {
            info!("Initializing database storage...");
            let database = DatabaseStorage::new().await?;
            info!("Database storage initialized successfully");
            Arc::new(database)
        }
    };

    // CSV backend lazily creates its file and header here; the document
    // backend keeps the no-op default.
    storage.init().await?;

    server::start_server(storage, cli.port).await?;

    Ok(())
}
