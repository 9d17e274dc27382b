use clap::Parser;
use colored::*;
use gist_stars::badge::Badge;
use gist_stars::cli::{Cli, Command};
use gist_stars::error::{GistStarsError, Result};
use gist_stars::gist_stars::{GistStarsHandler, GistStarsParams};
use gist_stars::github::GitHubClient;
use gist_stars::service::{gist_stars_service, DEFAULT_BADGE};
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::error;
use tracing_subscriber::EnvFilter;
use url::Url;

#[tokio::main]
async fn main() {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Badge { gist_id } => {
            let params = GistStarsParams { gist_id: gist_id.clone() };
            match fetch_badge(cli, &params).await {
                Ok(badge) => print_json(&badge, cli.pretty),
                Err(e) => {
                    error!("Badge for gist {} failed: {}", params.gist_id, e);
                    print_json(&Badge::from_error(&DEFAULT_BADGE, &e), cli.pretty)?;
                    Err(e)
                }
            }
        }
        Command::Describe => print_json(&gist_stars_service(), cli.pretty),
    }
}

async fn fetch_badge(cli: &Cli, params: &GistStarsParams) -> Result<Badge> {
    let token = cli
        .token
        .clone()
        .ok_or_else(|| GistStarsError::EnvError("GITHUB_TOKEN is not set".to_string()))?;
    let endpoint = Url::parse(&cli.api_url)
        .map_err(|e| GistStarsError::EnvError(format!("Invalid GraphQL URL {}: {}", cli.api_url, e)))?;

    let client = GitHubClient::with_endpoint(token, endpoint, Duration::from_secs(cli.timeout))?;
    let handler = GistStarsHandler::new(Arc::new(client));

    let rendered = handler.handle(params).await?;
    Ok(Badge::new(&DEFAULT_BADGE, rendered))
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json(&mut handle, value, pretty)
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
