//! Разовый консольный отчет: один проход конвейера без сервера и кеша.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seat_monitor::{config::Config, report, scraper::SeatScraper};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let scraper = SeatScraper::new(config.events).context("failed to build HTTP client")?;
    let seats = scraper
        .collect_report()
        .await
        .context("failed to fetch seat data")?;

    println!("{}", report::render_report(&seats));
    Ok(())
}
