use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Итог по одному событию. Создается один раз за проход агрегации,
// после этого не меняется. Имена полей совпадают с форматом API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResult {
    pub date: String,
    pub free: u32,
    pub taken: u32,
    pub total: u32,
    pub free_percent: f64,
    pub url: String,
}

// Суммарная строка по всем событиям
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub free_total: u32,
    pub taken_total: u32,
    pub all_total: u32,
    pub total_percent: f64,
}

// Результат целого прохода: события в порядке конфигурации + сумма
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateReport {
    pub events: Vec<EventResult>,
    pub summary: Summary,
}

/// Снимок состояния кеша для GET /api/status.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub cache_valid: bool,
    pub cached_at: Option<DateTime<Utc>>,
    pub cache_expires_at: Option<DateTime<Utc>>,
}
