//! Operator tool to reset a user's password.
//!
//! Usage:
//!   cargo run --bin reset-password -- --email ops@example.com
//!   cargo run --bin reset-password -- --email ops@example.com --password <new>
//!
//! Without --password a random temporary password is generated and printed
//! exactly once.

use std::env;

use rigops::config::Config;
use rigops::db::DbPool;
use rigops::error::{AppError, AppResult};
use rigops::services::accounts::{self, ResetOutcome};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut email: Option<String> = None;
    let mut password: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--email" | "-e" => {
                i += 1;
                if i < args.len() {
                    email = Some(args[i].clone());
                }
            }
            "--password" | "-p" => {
                i += 1;
                if i < args.len() {
                    password = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    // Validate required arguments
    let email = match email {
        Some(e) => e,
        None => {
            eprintln!("Error: --email is required");
            print_usage();
            std::process::exit(1);
        }
    };

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

    let result = run(&pool, &email, password.as_deref()).await;

    // Release the pool on success and failure alike
    if let Err(e) = pool.close().await {
        eprintln!("Warning: failed to close database pool: {}", e);
    }

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(pool: &DbPool, email: &str, password: Option<&str>) -> AppResult<()> {
    match accounts::reset_password(pool, email, password).await? {
        ResetOutcome::UserNotFound => Err(AppError::NotFound(format!("User {}", email))),
        ResetOutcome::Updated { user, generated } => {
            match generated {
                Some(temp) => {
                    println!("Password reset for {}.", user.email);
                    println!();
                    println!("  Temporary password: {}", temp);
                    println!();
                    println!("  Save it now - it cannot be retrieved later.");
                }
                None => {
                    println!("Password updated for {}.", user.email);
                }
            }
            Ok(())
        }
    }
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage: reset-password --email <email> [--password <new-password>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --email, -e     Email of the account to reset (required)");
    eprintln!("  --password, -p  New password (default: generate a temporary one)");
    eprintln!("  --help, -h      Show this help");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  reset-password --email ops@example.com");
    eprintln!("  reset-password --email ops@example.com --password s3cure-Pass");
    eprintln!();
}
