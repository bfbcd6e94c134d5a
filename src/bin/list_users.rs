//! Operator tool to list dashboard accounts.
//!
//! Usage:
//!   cargo run --bin list-users

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
        eprintln!("Error listing users: {}", e);
        std::process::exit(1);
    }
}

async fn run(pool: &DbPool) -> AppResult<()> {
    let users = accounts::list_users(pool).await?;

    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    println!();
    println!(
        "{:<36} {:<30} {:<20} {:<8} {:<16}",
        "ID", "EMAIL", "NAME", "ROLE", "CREATED"
    );
    println!("{}", "─".repeat(114));

    for user in users {
        // Truncate long fields so the table stays aligned
        let email = truncate(&user.email, 28);
        let name = truncate(&user.name, 18);

        println!(
            "{:<36} {:<30} {:<20} {:<8} {:<16}",
            user.id,
            email,
            name,
            user.role,
            user.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    println!();

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() > max {
        format!("{}...", &s[..max.saturating_sub(3)])
    } else {
        s.to_string()
    }
}
