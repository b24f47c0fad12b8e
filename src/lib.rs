pub mod cache;
pub mod config;
pub mod controllers;
pub mod models;
pub mod report;
pub mod scraper;

use std::sync::Arc;

// Shared state для всего приложения
pub struct AppState {
    pub config: config::Config,
    pub scraper: scraper::SeatScraper,
    pub cache: cache::ReportCache,
}

impl AppState {
    pub fn new(config: config::Config) -> Result<Arc<Self>, reqwest::Error> {
        let scraper = scraper::SeatScraper::new(config.events.clone())?;
        let cache = cache::ReportCache::new(config.cache.ttl_seconds);

        Ok(Arc::new(Self {
            config,
            scraper,
            cache,
        }))
    }
}
