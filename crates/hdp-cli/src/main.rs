use anyhow::Context;
use clap::{ArgGroup, Parser};
use hdp_scraper::ListingScraper;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hdp-cli")]
#[command(about = "Extract a listing record from a home details page")]
#[command(group(ArgGroup::new("target").required(true).args(["zpid", "url"])))]
struct Cli {
    /// Property identifier; the detail URL is built from it.
    #[arg(long)]
    zpid: Option<String>,

    /// Full home details URL.
    #[arg(long)]
    url: Option<String>,

    /// Per-request timeout in seconds. Overrides `HDP_REQUEST_TIMEOUT_SECS`.
    #[arg(short = 't', long)]
    request_timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = hdp_core::load_app_config().context("loading configuration")?;
    if cli.request_timeout.is_some() {
        config.request_timeout_secs = cli.request_timeout;
    }

    // Logs go to stderr so stdout carries only the JSON record.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(
        base_url = %config.base_url,
        timeout_secs = ?config.request_timeout_secs,
        "configuration loaded"
    );

    let scraper = ListingScraper::from_config(&config).context("building HTTP client")?;
    let record = scraper
        .scrape(cli.url.as_deref(), cli.zpid.as_deref())
        .await
        .context("scraping listing")?;

    let json = serde_json::to_string_pretty(&record.to_flat_map())?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests;
