//! Operator tool to check database table row counts.
//!
//! Usage:
//!   cargo run --bin check-db

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
        eprintln!("Error checking tables: {}", e);
        std::process::exit(1);
    }
}

async fn run(pool: &DbPool) -> AppResult<()> {
    println!("Checking database tables...");
    println!();

    let counts = inventory::collect_table_counts(pool).await?;

    println!("{:<20} {:>10}", "TABLE", "ROWS");
    println!("{}", "─".repeat(31));
    println!("{:<20} {:>10}", "users", counts.users);
    println!("{:<20} {:>10}", "import_staging", counts.import_staging);
    println!("{:<20} {:>10}", "drilling_entries", counts.drilling_entries);
    println!("{:<20} {:>10}", "financial_params", counts.financial_params);
    println!();
    println!(
        "Drilling entries in the last {} days: {}",
        inventory::RECENT_WINDOW_DAYS,
        counts.recent_drilling_entries
    );

    if counts.is_empty() {
        println!();
        println!("All tables are empty. Run seed-users and the importer to populate them.");
    }

    Ok(())
}
