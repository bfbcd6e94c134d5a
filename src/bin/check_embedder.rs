//! Smoke test for the local embedding model dependency.
//!
//! Usage:
//!   cargo run --bin check-embedder
//!
//! Loads the fastembed model the maintenance-note similarity search depends
//! on and embeds one probe sentence. No database access.

use std::time::Instant;

use rigops::services::embedding::{self, EmbeddingEngine};

fn main() {
    println!("Loading embedding model ({})...", embedding::MODEL_NAME);

    let load_started = Instant::now();
    let mut engine = match EmbeddingEngine::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error loading embedding model: {}", e);
            std::process::exit(1);
        }
    };
    println!("Model loaded in {} ms", load_started.elapsed().as_millis());

    let probe_started = Instant::now();
    let dims = match engine.probe() {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error embedding probe sentence: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Probe sentence embedded in {} ms ({} dimensions)",
        probe_started.elapsed().as_millis(),
        dims
    );
    println!("Embedding dependency OK.");
}
