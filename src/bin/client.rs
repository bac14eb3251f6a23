//! Command-line client for a running link-shortener server.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (optional validity in minutes and custom code)
//! cargo run --bin client -- shorten https://example.com --validity 10 --shortcode promo
//!
//! # List all links
//! cargo run --bin client -- stats
//!
//! # Check server health
//! cargo run --bin client -- health
//! ```
//!
//! # Environment Variables
//!
//! - `SHORTENER_URL` (optional): server address, same as `--server`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};

/// CLI client for link-shortener.
#[derive(Parser)]
#[command(name = "client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Server base URL
    #[arg(
        short,
        long,
        env = "SHORTENER_URL",
        default_value = "http://localhost:8080"
    )]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Shorten {
        /// URL to shorten
        url: String,

        /// Lifetime in minutes (server default: 30)
        #[arg(short, long)]
        validity: Option<f64>,

        /// Custom short code
        #[arg(short = 'c', long)]
        shortcode: Option<String>,
    },

    /// List all links with statistics
    Stats,

    /// Show server health
    Health,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShortenResponse {
    short_link: String,
    expiry: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UrlStatistics {
    shortcode: String,
    short_link: String,
    original_url: String,
    created_at: String,
    expires_at: String,
    total_clicks: u64,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = Client::new();
    let server = cli.server.trim_end_matches('/');

    match cli.command {
        Commands::Shorten {
            url,
            validity,
            shortcode,
        } => shorten(&client, server, url, validity, shortcode).await,
        Commands::Stats => stats(&client, server).await,
        Commands::Health => health(&client, server).await,
    }
}

/// Posts a shorten request and prints the result.
async fn shorten(
    client: &Client,
    server: &str,
    url: String,
    validity: Option<f64>,
    shortcode: Option<String>,
) -> Result<()> {
    let mut body = json!({ "originalUrl": url });
    if let Some(validity) = validity {
        body["validity"] = json!(validity);
    }
    if let Some(shortcode) = shortcode {
        body["shortcode"] = json!(shortcode);
    }

    let response = client
        .post(format!("{server}/shorten"))
        .json(&body)
        .send()
        .await
        .with_context(|| format!("Failed to reach {server}"))?;

    let status = response.status();
    if !status.is_success() {
        return report_error(status, response).await;
    }

    let created: ShortenResponse = response
        .json()
        .await
        .context("Unexpected response from server")?;

    println!("{}", "✅ Short link created".green().bold());
    println!("  Link:    {}", created.short_link.bright_yellow().bold());
    println!("  Expires: {}", created.expiry.cyan());

    Ok(())
}

/// Fetches and prints the statistics table.
async fn stats(client: &Client, server: &str) -> Result<()> {
    let items: Vec<UrlStatistics> = client
        .get(format!("{server}/statistics"))
        .send()
        .await
        .with_context(|| format!("Failed to reach {server}"))?
        .error_for_status()?
        .json()
        .await
        .context("Unexpected response from server")?;

    println!("{}", "📊 Links".bright_blue().bold());
    println!();

    if items.is_empty() {
        println!("{}", "  No links yet".yellow());
        return Ok(());
    }

    for item in &items {
        println!(
            "  {} {}",
            item.shortcode.bright_white().bold(),
            item.short_link.bright_black()
        );
        println!("    → {}", item.original_url);
        println!(
            "    created {}  expires {}  clicks {}",
            item.created_at.cyan(),
            item.expires_at.cyan(),
            item.total_clicks
        );
    }

    println!();
    println!("  Total: {}", items.len().to_string().bold());

    Ok(())
}

/// Prints the health report.
async fn health(client: &Client, server: &str) -> Result<()> {
    let response = client
        .get(format!("{server}/health"))
        .send()
        .await
        .with_context(|| format!("Failed to reach {server}"))?;

    let healthy = response.status().is_success();
    let report: Value = response
        .json()
        .await
        .context("Unexpected response from server")?;

    let status = report["status"].as_str().unwrap_or("unknown");
    if healthy {
        println!("{} {}", "✅".green(), status.green().bold());
    } else {
        println!("{} {}", "❌".red(), status.red().bold());
    }

    if let Some(checks) = report["checks"].as_object() {
        for (name, check) in checks {
            let ok = check["status"] == "ok";
            let message = check["message"].as_str().unwrap_or("");
            let marker = if ok {
                format!("{:<6}", "ok").green()
            } else {
                format!("{:<6}", "error").red()
            };
            println!("  {:<10} {} {}", name, marker, message.bright_black());
        }
    }

    Ok(())
}

/// Prints the server's error message and fails.
async fn report_error(status: StatusCode, response: reqwest::Response) -> Result<()> {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.to_string(),
    };

    println!("{} {}", "❌".red(), message.red().bold());
    anyhow::bail!("server responded with {status}")
}
