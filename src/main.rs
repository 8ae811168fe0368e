//! CineVision mock backend.
//!
//! # Usage
//!
//! ```bash
//! # Start the server (default command)
//! cargo run
//! cargo run -- serve --listen 0.0.0.0:8080
//!
//! # List the endpoints the mock answers
//! cargo run -- routes
//!
//! # Validate the fixture document and print entity counts
//! cargo run -- fixtures
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

use cinevision_mock::api::routes::ROUTE_TABLE;
use cinevision_mock::config::{self, Config};
use cinevision_mock::infrastructure::fixtures::FixtureCatalog;
use cinevision_mock::server;

/// Local mock backend for the CineVision frontend.
#[derive(Parser)]
#[command(name = "cinevision-mock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Bind address, overrides LISTEN
        #[arg(short, long)]
        listen: Option<String>,
    },

    /// Print the endpoint table
    Routes,

    /// Load the fixture document and print entity counts
    Fixtures,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve { listen: None }) {
        Commands::Serve { listen } => {
            let mut config = Config::from_env()?;
            if let Some(listen) = listen {
                config.listen_addr = listen;
            }
            config.validate()?;

            init_tracing(&config);
            config.print_summary();

            server::run(config).await
        }
        Commands::Routes => {
            print_routes();
            Ok(())
        }
        Commands::Fixtures => {
            let config = config::load_from_env()?;
            print_fixtures(&config)
        }
    }
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn print_routes() {
    println!("{}", "🎬 CineVision mock endpoints".bright_blue().bold());
    println!();
    println!(
        "  {:<6} {:<80} {}",
        "Method".bright_white().bold(),
        "Path".bright_white().bold(),
        "Description".bright_white().bold()
    );
    println!("  {}", "─".repeat(110).bright_black());

    for route in ROUTE_TABLE {
        let method = if route.method == "GET" {
            route.method.green()
        } else {
            route.method.yellow()
        };
        println!(
            "  {:<6} {:<80} {}",
            method,
            route.path.cyan(),
            route.description.bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        ROUTE_TABLE.len().to_string().bright_white().bold()
    );
}

fn print_fixtures(config: &Config) -> Result<()> {
    let source = match &config.fixtures_path {
        Some(path) => path.display().to_string(),
        None => "embedded".to_string(),
    };
    let catalog = FixtureCatalog::load(config.fixtures_path.as_deref())?;
    let summary = catalog.summary();

    println!("{}", "📦 Fixture document".bright_blue().bold());
    println!("  Source: {}", source.cyan());
    println!();

    let rows = [
        ("Movies", summary.movies),
        ("Coming soon", summary.coming_soon),
        ("Cities", summary.cities),
        ("Saloons", summary.saloons),
        ("Comments", summary.comments),
        ("Showtimes", summary.showtimes),
        ("Daily slots", summary.daily_slots),
        ("Actors", summary.actors),
        ("Categories", summary.categories),
        ("Directors", summary.directors),
    ];
    for (label, count) in rows {
        println!(
            "  {:<12} {}",
            label,
            count.to_string().bright_white().bold()
        );
    }

    println!();
    println!("{}", "✅ Fixtures are valid".green().bold());
    Ok(())
}
