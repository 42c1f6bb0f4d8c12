//! randomcard - fetch a random card from YGOPRODeck and hand back its name

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use randomcard::api::{self, AppState};
use randomcard::config::Config;
use randomcard::types::RandomCardResponse;
use randomcard::upstream::{random_card_name, HttpCardSource};

#[derive(Parser)]
#[command(name = "randomcard")]
#[command(about = "Tiny HTTP service that returns the name of a random Yu-Gi-Oh! card")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind to
        #[arg(short, long)]
        bind: Option<String>,

        /// Upstream random card URL
        #[arg(short, long)]
        upstream: Option<String>,
    },

    /// Fetch one random card and print the response body
    Fetch {
        /// Upstream random card URL
        #[arg(short, long)]
        upstream: Option<String>,
    },

    /// Write a default config file
    Init {
        /// Where to write the config (defaults to the user config dir)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment
    let _ = dotenvy::dotenv();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("randomcard={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let command = cli.command.unwrap_or(Commands::Serve {
        port: None,
        bind: None,
        upstream: None,
    });

    match command {
        Commands::Serve { port, bind, upstream } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(port) = port {
                config.http_port = port;
            }
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            if let Some(upstream) = upstream {
                config.upstream_url = upstream;
            }

            let addr = config.listen_addr()?;
            let router = api::create_router(AppState::with_upstream(config.upstream_url.clone()));
            let listener = tokio::net::TcpListener::bind(addr).await?;

            tracing::info!("Starting HTTP server on {}", addr);
            tracing::info!("Upstream: {}", config.upstream_url);

            println!("randomcard server running at http://{}", addr);
            println!("  Card:     POST http://{}/RandomCard", addr);
            println!("  API Docs: http://{}/api/openapi.json", addr);
            println!("  Health:   http://{}/health", addr);

            axum::serve(listener, router).await?;
        }

        Commands::Fetch { upstream } => {
            let url = match upstream {
                Some(url) => url,
                None => load_config(cli.config.as_deref())?.upstream_url,
            };
            let source = HttpCardSource::new(url);

            let response = RandomCardResponse::from(random_card_name(&source).await);
            println!("{}", serde_json::to_string(&response)?);
        }

        Commands::Init { path } => {
            let path = match path.or(cli.config).or_else(Config::config_path) {
                Some(path) => path,
                None => anyhow::bail!("Could not determine a config directory; pass --path"),
            };

            if path.exists() {
                anyhow::bail!("Config already exists at {}", path.display());
            }

            Config::default().save_to(&path)?;
            tracing::info!("Wrote default config to {:?}", path);
            println!("✓ Config written to {}", path.display());
        }
    }

    Ok(())
}

/// Explicit `--config` file, else the default location, else built-in defaults
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    Ok(config)
}
