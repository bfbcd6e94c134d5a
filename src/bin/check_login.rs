//! Operator tool to verify a login against the stored password hash.
//!
//! Usage:
//!   cargo run --bin check-login -- --email ops@example.com --password <password>
//!
//! The tool reports the outcome and exits 0 in every non-error case; a
//! missing user or a mismatching password is a result, not a failure.

use std::env;

use rigops::config::Config;
use rigops::db::DbPool;
use rigops::error::AppResult;
use rigops::services::accounts::{self, LoginCheck};

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

    let password = match password {
        Some(p) => p,
        None => {
            eprintln!("Error: --password is required");
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

    let result = run(&pool, &email, &password).await;

    // Release the pool on success and failure alike
    if let Err(e) = pool.close().await {
        eprintln!("Warning: failed to close database pool: {}", e);
    }

    if let Err(e) = result {
        eprintln!("Error verifying login: {}", e);
        std::process::exit(1);
    }
}

async fn run(pool: &DbPool, email: &str, password: &str) -> AppResult<()> {
    match accounts::verify_login(pool, email, password).await? {
        LoginCheck::UserNotFound => {
            println!("User not found");
        }
        LoginCheck::Mismatch => {
            println!("Password mismatch for {}", email);
        }
        LoginCheck::Verified(user) => {
            println!("Password verified for {} ({})", user.email, user.role);
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!();
    eprintln!("Usage: check-login --email <email> --password <password>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --email, -e     Email of the account to check (required)");
    eprintln!("  --password, -p  Password to verify (required)");
    eprintln!("  --help, -h      Show this help");
    eprintln!();
}
