//! Operator tool to seed baseline dashboard accounts.
//!
//! Usage:
//!   cargo run --bin seed-users
//!
//! The admin account (and, in development, a sample operator account) comes
//! from the RIGOPS_SEED_* environment variables; development mode falls back
//! to documented defaults. Existing emails are skipped, never overwritten.

use rigops::config::Config;
use rigops::db::DbPool;
use rigops::error::AppResult;
use rigops::services::accounts;

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

    let result = run(&pool, &config).await;

    // Release the pool on success and failure alike
    if let Err(e) = pool.close().await {
        eprintln!("Warning: failed to close database pool: {}", e);
    }

    if let Err(e) = result {
        eprintln!("Error seeding users: {}", e);
        std::process::exit(1);
    }
}

async fn run(pool: &DbPool, config: &Config) -> AppResult<()> {
    let plan = accounts::seed_plan(config)?;
    let report = accounts::seed_users(pool, &plan).await?;

    for email in &report.created {
        println!("Created {}", email);
    }
    for email in &report.skipped {
        println!("Skipped {} (already exists)", email);
    }

    println!();
    println!(
        "Seeding complete: {} created, {} skipped.",
        report.created.len(),
        report.skipped.len()
    );

    Ok(())
}
