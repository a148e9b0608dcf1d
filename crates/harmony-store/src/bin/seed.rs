//! # Database Seeder
//!
//! Initializes a Harmony database file with the starter provider catalog.
//!
//! ## Usage
//! ```bash
//! # Create ./harmony_dev.db (default)
//! cargo run -p harmony-store --bin seed
//!
//! # Specify database path
//! cargo run -p harmony-store --bin seed -- --db ./data/harmony.db
//! ```

use std::env;

use tracing_subscriber::EnvFilter;

use harmony_store::snapshot::keys;
use harmony_store::{AppStore, Database, DbConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./harmony_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Harmony Database Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./harmony_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Harmony Database Seeder");
    println!("=======================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // An existing catalog snapshot means this database is already in use
    let already_seeded = db.snapshots().get(keys::PROVIDERS).await?.is_some();
    if already_seeded {
        println!("⚠ Database already has a provider catalog");
        println!("  Skipping seed to avoid overwriting live data.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Opening the store on a fresh database writes the starter catalog
    let store = AppStore::open(db).await?;

    let service_count: usize = store.providers().iter().map(|p| p.services.len()).sum();
    println!();
    println!(
        "✓ Seeded {} providers with {} services",
        store.providers().len(),
        service_count
    );
    for provider in store.providers() {
        println!(
            "  {} ({:?}, {} services)",
            provider.name,
            provider.kind,
            provider.services.len()
        );
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
