//! Operator tool to audit stored password hash algorithms.
//!
//! Usage:
//!   cargo run --bin debug-password-hashes
//!
//! Reports the detected algorithm, PHC prefix and length per account. The
//! hash values themselves are never printed.

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

    let result = run(&pool).await;

    // Release the pool on success and failure alike
    if let Err(e) = pool.close().await {
        eprintln!("Warning: failed to close database pool: {}", e);
    }

    if let Err(e) = result {
        eprintln!("Error auditing password hashes: {}", e);
        std::process::exit(1);
    }
}

async fn run(pool: &DbPool) -> AppResult<()> {
    let audits = accounts::list_password_hashes(pool).await?;

    if audits.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    println!();
    println!(
        "{:<32} {:<10} {:<12} {:>6}",
        "EMAIL", "ALGORITHM", "PREFIX", "BYTES"
    );
    println!("{}", "─".repeat(64));

    for audit in audits {
        println!(
            "{:<32} {:<10} {:<12} {:>6}",
            audit.email,
            audit.algorithm,
            audit.prefix.as_deref().unwrap_or("-"),
            audit.length
        );
    }

    println!();
    println!("Hash values are never printed by this tool.");

    Ok(())
}
