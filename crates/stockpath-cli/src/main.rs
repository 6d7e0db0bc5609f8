//! Stockpath CLI - serve and query the fulfillment path graph

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use stockpath_core::GraphContext;
use stockpath_server::PathService;
use stockpath_storage::SqliteRepository;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "stockpath")]
#[command(author, version, about = "Warehouse fulfillment path service")]
struct Cli {
    /// Path to the warehouse database
    #[arg(short, long, env = "STOCKPATH_DATABASE", global = true)]
    database: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn database_path(&self) -> PathBuf {
        self.database.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stockpath")
                .join("stockpath.db")
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start the path API server
    Serve {
        /// Listen address
        #[arg(short, long, env = "STOCKPATH_ADDR", default_value = "127.0.0.1:8420")]
        addr: String,
    },
    /// Resolve a fulfillment path once and print it
    Path {
        /// Destination warehouse id
        destination: Uuid,

        /// Default warehouse id that must appear in the result
        default_warehouse: Uuid,

        /// Print the raw JSON path instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Load warehouses from a JSON file into the database
    Import {
        /// JSON file holding an array of warehouses
        file: PathBuf,
    },
}

fn build_service(cli: &Cli) -> anyhow::Result<PathService<SqliteRepository>> {
    let path = cli.database_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    tracing::debug!("using database at {:?}", path);

    let repository = SqliteRepository::open(&path)?;
    Ok(PathService::new(
        Arc::new(repository),
        Arc::new(GraphContext::new()),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    match &cli.command {
        Commands::Serve { addr } => {
            let service = Arc::new(build_service(&cli)?);

            // The graph must be in place before the first query lands;
            // a failed rebuild here is fatal to bring-up.
            service.update_graph().await?;

            let shutdown = CancellationToken::new();
            let signal_token = shutdown.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("graceful shutdown");
                    signal_token.cancel();
                }
            });

            stockpath_server::http::serve(service, addr, shutdown).await?;
        }
        Commands::Path {
            destination,
            default_warehouse,
            json,
        } => {
            let service = build_service(&cli)?;
            service.update_graph().await?;

            let path =
                service.get_path(destination, default_warehouse, &CancellationToken::new())?;

            if *json {
                let nodes: Vec<_> = path
                    .iter()
                    .map(|n| {
                        serde_json::json!({
                            "id": n.node.id,
                            "name": n.node.name,
                            "kind": n.node.kind.as_str(),
                            "level": n.level,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&nodes)?);
            } else {
                for hop in path.iter() {
                    println!(
                        "{:>3}  {:<28} {:<12} {}",
                        hop.level,
                        hop.node.name,
                        hop.node.kind.as_str(),
                        hop.node.id
                    );
                }
            }
        }
        Commands::Import { file } => {
            let path = cli.database_path();
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let repository = SqliteRepository::open(&path)?;

            let reader = std::fs::File::open(file)?;
            let warehouses: Vec<stockpath_core::Warehouse> =
                serde_json::from_reader(std::io::BufReader::new(reader))?;

            let count = warehouses.len();
            for warehouse in &warehouses {
                repository.save(warehouse)?;
            }
            tracing::info!(count, "imported warehouses");
            println!("Imported {} warehouses", count);
        }
    }

    Ok(())
}
