//! Operator tool to inspect the most recent import batch.
//!
//! Usage:
//!   cargo run --bin check-latest-batch

use rigops::config::Config;
use rigops::db::DbPool;
use rigops::error::AppResult;
use rigops::services::inventory;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

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

    let result = run(&pool).await;

    // Release the pool on success and failure alike
    if let Err(e) = pool.close().await {
        eprintln!("Warning: failed to close database pool: {}", e);
    }

    if let Err(e) = result {
        eprintln!("Error inspecting latest batch: {}", e);
        std::process::exit(1);
    }
}

async fn run(pool: &DbPool) -> AppResult<()> {
    match inventory::latest_batch(pool).await? {
        Some(batch) => {
            println!("Latest import batch:");
            println!("  Batch ID: {}", batch.batch_id);
            println!("  Status:   {}", batch.status);
            println!("  Created:  {}", batch.created_at.to_rfc3339());
            println!("  Rows:     {}", batch.row_count);
        }
        None => {
            println!("No import batches found.");
        }
    }

    Ok(())
}
