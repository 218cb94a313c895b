//! CLI tool to inspect and apply LMS database upgrades.
//!
//! Usage:
//!   cargo run --bin lms-upgrade -- status
//!   cargo run --bin lms-upgrade -- apply

use std::env;

use tracing_subscriber::FmtSubscriber;

use lms_admin_lib::config::Config;
use lms_admin_lib::db::DbPool;
use lms_admin_lib::upgrade;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = args[1].as_str();
    if matches!(command, "help" | "--help" | "-h") {
        print_usage();
        return;
    }

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

    match command {
        "status" => status(&pool).await,
        "apply" => apply(&pool).await,
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            std::process::exit(1);
        }
    }
}

async fn status(pool: &DbPool) {
    let current = match upgrade::current_db_version(pool.connection()).await {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error reading database version: {}", e);
            std::process::exit(1);
        }
    };

    let pending = match upgrade::pending_upgrades(&current) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Database version: {}", current);
    if pending.is_empty() {
        println!("No pending upgrades.");
        return;
    }

    println!("Pending upgrades:");
    for step in &pending {
        println!("  {}  {}", step.version(), step.description());
    }
}

async fn apply(pool: &DbPool) {
    if let Err(e) = pool.run_migrations().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    match pool.run_upgrades().await {
        Ok(applied) if applied.is_empty() => println!("Database is up to date."),
        Ok(applied) => {
            for version in applied {
                println!("Applied {}", version);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!("Usage: lms-upgrade <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  status    Show the database version and pending upgrades");
    eprintln!("  apply     Create missing baseline tables and apply pending upgrades");
    eprintln!("  help      Show this message");
}
