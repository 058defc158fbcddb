//! crmctl CLI - client/sales store demonstration driver
//!
//! Provides:
//! - `demo`: the full client lifecycle against the store
//!   (insert → read → update → read → delete → read-expect-failure)
//! - `sales`: standalone sales query for one client

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crmctl_core::{db, ClientRepo, NewClient, SalesRepo};
use sqlx::SqlitePool;
use tracing::info;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "crmctl",
    author,
    version,
    about = "Transactional CRUD driver for the client/sales store"
)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "CRMCTL_DB", default_value = "demo.db")]
    db: PathBuf,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the client lifecycle demonstration
    Demo,
    /// List sales for a client
    Sales {
        /// Client identifier
        #[arg(long)]
        client: i64,

        /// Output as a JSON array instead of one record per line
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug)?;

    // Connection failure at startup is the one hard error.
    let pool = db::connect(&cli.db).await.with_context(|| {
        format!("failed to connect to the database at {}", cli.db.display())
    })?;

    match cli.command {
        Commands::Demo => run_demo(&pool).await,
        Commands::Sales { client, json } => run_sales(&pool, client, json).await,
    }
}

/// Run the lifecycle sequence, halting at the first failure.
///
/// Operation failures are printed, not propagated: the process exits
/// normally either way. The final lookup is expected to fail NotFound,
/// which prints through the same path.
async fn run_demo(pool: &SqlitePool) -> Result<()> {
    if let Err(err) = demo_sequence(pool).await {
        println!("{err}");
    }
    Ok(())
}

async fn demo_sequence(pool: &SqlitePool) -> crmctl_core::Result<()> {
    let clients = ClientRepo::new(pool);

    let new_client = NewClient {
        fio: "John Doe".into(),
        login: "JDFPerson".into(),
        birthday: "19700101".into(),
        email: "ThefirstpersonJD@gmail.com".into(),
    };

    let id = clients.insert(&new_client).await?;

    let client = clients.get(id).await?;
    println!("{client}");

    clients.update_login("AgentSmith@gmail.com", id).await?;

    let client = clients.get(id).await?;
    println!("{client}");

    clients.delete(id).await?;

    // The record is gone; this lookup fails NotFound by design of the demo.
    clients.get(id).await?;

    Ok(())
}

async fn run_sales(pool: &SqlitePool, client: i64, json: bool) -> Result<()> {
    let sales = SalesRepo::new(pool)
        .list_for_client(client)
        .await
        .context("failed to read sales")?;

    info!(client, count = sales.len(), "fetched sales");

    if json {
        println!("{}", serde_json::to_string_pretty(&sales)?);
    } else {
        for sale in &sales {
            println!("{sale}");
        }
    }

    Ok(())
}
