//! cache.rs
//!
//! Кеш последнего отчета с фиксированным TTL.
//!
//! Запись одна и заменяется целиком: отчет и метка времени живут в одном
//! значении за `RwLock`, поэтому читатель никогда не увидит сумму от
//! одного прохода с меткой от другого. Протухший кеш пересчитывается
//! синхронно тем запросом, который его заметил; мьютекс `refresh_lock`
//! схлопывает одновременные пересчеты в один поход к источнику.

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::models::{AggregateReport, CacheStatus};
use crate::scraper::{ScrapeError, SeatScraper};

/// Один успешный результат пересчета.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub report: AggregateReport,
    pub computed_at: DateTime<Utc>,
}

impl CacheEntry {
    // Свежесть в полуинтервале [computed_at, computed_at + ttl)
    fn is_valid_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.computed_at < ttl
    }
}

pub struct ReportCache {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
    // Single-flight: пересчет держит этот мьютекс, остальные ждут
    refresh_lock: Mutex<()>,
}

impl ReportCache {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            ttl: Duration::seconds(ttl_seconds as i64),
            entry: RwLock::new(None),
            refresh_lock: Mutex::new(()),
        }
    }

    /// Снимок состояния кеша, без побочных эффектов.
    pub async fn status(&self) -> CacheStatus {
        let guard = self.entry.read().await;
        match guard.as_ref() {
            Some(entry) => CacheStatus {
                cache_valid: entry.is_valid_at(Utc::now(), self.ttl),
                cached_at: Some(entry.computed_at),
                cache_expires_at: Some(entry.computed_at + self.ttl),
            },
            None => CacheStatus {
                cache_valid: false,
                cached_at: None,
                cache_expires_at: None,
            },
        }
    }

    /// Метка времени последнего успешного пересчета, если он был.
    pub async fn computed_at(&self) -> Option<DateTime<Utc>> {
        self.entry.read().await.as_ref().map(|e| e.computed_at)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Отдает свежую запись, при необходимости пересчитав ее.
    ///
    /// Неудачный пересчет не трогает прежнюю запись: и отчет, и метка
    /// времени остаются какими были (или `None`, если успешных
    /// пересчетов еще не было).
    pub async fn get_or_refresh(
        &self,
        scraper: &SeatScraper,
    ) -> Result<CacheEntry, ScrapeError> {
        if let Some(entry) = self.fresh_entry().await {
            return Ok(entry);
        }

        // Протухли. Берем мьютекс пересчета и проверяем еще раз:
        // пока мы ждали, другой запрос мог уже все обновить.
        let _refresh = self.refresh_lock.lock().await;
        if let Some(entry) = self.fresh_entry().await {
            return Ok(entry);
        }

        let report = scraper.collect_report().await.inspect_err(|e| {
            warn!("Cache refresh failed: {}", e);
        })?;

        let entry = CacheEntry {
            report,
            computed_at: Utc::now(),
        };
        *self.entry.write().await = Some(entry.clone());
        info!(
            "Cache refreshed, {} events, valid until {}",
            entry.report.events.len(),
            entry.computed_at + self.ttl
        );
        Ok(entry)
    }

    async fn fresh_entry(&self) -> Option<CacheEntry> {
        let guard = self.entry.read().await;
        guard
            .as_ref()
            .filter(|entry| entry.is_valid_at(Utc::now(), self.ttl))
            .cloned()
    }
}
