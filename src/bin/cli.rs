//! Command-line client for a running shortener service.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a long URL
//! cargo run --bin shortener-cli -- shorten https://example.com/some/long/path
//!
//! # Open the URL behind a short code in the default browser
//! cargo run --bin shortener-cli -- redirect ABC1
//!
//! # Talk to another instance
//! cargo run --bin shortener-cli -- --api-url http://sho.rt redirect ABC1
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTENER_API_URL` (optional): service base URL (default: `http://localhost:8080`)

use http_url_shortener::client::browser::open_in_browser;
use http_url_shortener::client::{ClientError, DEFAULT_API_URL, ShortenerClient};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

/// Client for the URL shortener service.
#[derive(Parser)]
#[command(name = "shortener-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the shortener service
    #[arg(long, env = "SHORTENER_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten a long URL
    Shorten {
        /// URL to shorten
        #[arg(default_value = "")]
        url: String,
    },

    /// Open the URL behind a short code in the browser
    Redirect {
        /// Four-character short code
        #[arg(default_value = "")]
        code: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ShortenerClient::new(cli.api_url)?;

    let outcome = match cli.command {
        Commands::Shorten { url } => handle_shorten(&client, &url).await,
        Commands::Redirect { code } => handle_redirect(&client, &code).await,
    };

    if let Err(e) = outcome {
        println!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Prints the short URL for `url`.
async fn handle_shorten(client: &ShortenerClient, url: &str) -> Result<(), ClientError> {
    let short_url = client.shorten(url).await?;
    println!("{}", short_url.bright_cyan());
    Ok(())
}

/// Resolves `code` and opens its target.
async fn handle_redirect(client: &ShortenerClient, code: &str) -> Result<(), ClientError> {
    let location = client.resolve(code).await?;
    println!("Launching {}...", location.cyan());
    open_in_browser(&location)
}
