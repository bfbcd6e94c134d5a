//! Raw SQL migration runner for the web session table.
//!
//! Usage:
//!   cargo run --bin apply-session-table [path/to/file.sql]
//!
//! Reads one SQL file (default: scripts/session_table.sql) and executes it
//! against the database as a single batch. The session table belongs to the
//! web tier's session store and is not managed by the SeaORM migration chain.

use std::env;
use std::path::{Path, PathBuf};

use rigops::config::Config;
use rigops::db::{DbPool, raw_sql};
use rigops::error::AppResult;

/// Default SQL file applied when no argument is given.
const DEFAULT_SQL_PATH: &str = "scripts/session_table.sql";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return;
    }

    let path = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SQL_PATH));

    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let pool = match DbPool::new(&config).await {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error connecting to database: {}", e);
            std::process::exit(1);
        }
    };

    let result = run(&pool, &path).await;

    // Release the pool on success and failure alike
    if let Err(e) = pool.close().await {
        eprintln!("Warning: failed to close database pool: {}", e);
    }

    if let Err(e) = result {
        eprintln!("Error applying SQL file: {}", e);
        std::process::exit(1);
    }
}

async fn run(pool: &DbPool, path: &Path) -> AppResult<()> {
    println!("Applying {}...", path.display());
    raw_sql::apply_sql_file(pool.connection(), path).await?;
    println!("Applied {} successfully.", path.display());

    Ok(())
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage: apply-session-table [sql-file]");
    eprintln!();
    eprintln!("Applies one raw SQL file against DATABASE_URL.");
    eprintln!("Defaults to {} when no file is given.", DEFAULT_SQL_PATH);
    eprintln!();
}
