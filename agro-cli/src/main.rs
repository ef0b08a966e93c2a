//! AgroOptima Command Line Interface
//!
//! Usage:
//!   agro init            - Create the database schema and seed demo data
//!   agro seed            - Seed demo data (no-op when users exist)
//!   agro serve           - Start the API server
//!   agro tables          - List the underlying table names

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agro_api::{run_server, ApiConfig};
use agro_db::{seed_demo_data, Database};

#[derive(Parser)]
#[command(name = "agro")]
#[command(about = "AgroOptima advisor backend CLI")]
#[command(version)]
struct Cli {
    /// Database file path
    #[arg(long, default_value = "agrooptima.db")]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database schema and seed demo data
    Init,

    /// Seed demo data into an empty database
    Seed,

    /// Start the API server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
        /// Disable permissive CORS
        #[arg(long)]
        no_cors: bool,
        /// Secret for signing bearer tokens
        #[arg(long, env = "AGRO_JWT_SECRET")]
        jwt_secret: Option<String>,
    },

    /// List the underlying table names
    Tables,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let db = Arc::new(Database::open(&cli.db)?);

    match cli.command {
        Commands::Init => {
            // Schema is installed by open(); seeding is gated on an
            // empty user table.
            let seeded = seed_demo_data(&db)?;
            if seeded {
                println!("Database initialized and demo data seeded at {}", cli.db.display());
            } else {
                println!("Database already initialized at {}", cli.db.display());
            }
        }
        Commands::Seed => {
            if seed_demo_data(&db)? {
                println!("Demo data seeded");
            } else {
                println!("User table not empty, nothing seeded");
            }
        }
        Commands::Serve {
            host,
            port,
            no_cors,
            jwt_secret,
        } => {
            let mut config = ApiConfig {
                host,
                port,
                enable_cors: !no_cors,
                ..Default::default()
            };
            if let Some(secret) = jwt_secret {
                config.jwt_secret = secret;
            } else {
                tracing::warn!("using the built-in development JWT secret");
            }

            seed_demo_data(&db)?;
            run_server(&config, db).await?;
        }
        Commands::Tables => {
            for table in db.table_names()? {
                println!("{table}");
            }
        }
    }

    Ok(())
}
