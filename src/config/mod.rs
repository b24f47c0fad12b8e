use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub cache: CacheConfig,
    pub events: Vec<EventSource>,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

// Настройки кеша
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    pub ttl_seconds: u64,
}

// Одно отслеживаемое событие: дата показа и страница продажи билетов
#[derive(Debug, Clone, Deserialize)]
pub struct EventSource {
    pub label: String,
    pub url: String,
}

// Даты, которые отслеживаем по умолчанию
const DEFAULT_EVENT_SOURCES: &[(&str, &str)] = &[
    (
        "2025-09-28",
        "https://www.bilety24.pl/kup-bilet-na-631-lullaby-136682?id=808326#overall",
    ),
    (
        "2025-10-04",
        "https://www.bilety24.pl/kup-bilet-na-631-lullaby-136682?id=808301#overall",
    ),
    (
        "2025-10-05",
        "https://www.bilety24.pl/kup-bilet-na-631-lullaby-136682?id=808304#overall",
    ),
    (
        "2025-10-11",
        "https://www.bilety24.pl/kup-bilet-na-631-lullaby-136682?id=808305#overall",
    ),
];

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "5000".to_string())
                    .parse()
                    .expect("PORT must be a valid number"),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "seat_monitor=debug,tower_http=debug".to_string()),
            },
            cache: CacheConfig {
                ttl_seconds: env::var("CACHE_TTL_SECONDS")
                    .unwrap_or_else(|_| "900".to_string())
                    .parse()
                    .expect("CACHE_TTL_SECONDS must be a valid number"),
            },
            events: match env::var("EVENT_SOURCES") {
                Ok(raw) => parse_event_sources(&raw)
                    .expect("EVENT_SOURCES must be a `label=url;label=url` list"),
                Err(_) => default_event_sources(),
            },
        }
    }
}

fn default_event_sources() -> Vec<EventSource> {
    DEFAULT_EVENT_SOURCES
        .iter()
        .map(|(label, url)| EventSource {
            label: label.to_string(),
            url: url.to_string(),
        })
        .collect()
}

// Разбор переменной EVENT_SOURCES: `label=url;label=url`.
// URL сам содержит `=` в query-параметрах, поэтому делим только по первому знаку.
fn parse_event_sources(raw: &str) -> Option<Vec<EventSource>> {
    let mut sources = Vec::new();
    for entry in raw.split(';').filter(|e| !e.trim().is_empty()) {
        let (label, url) = entry.split_once('=')?;
        if label.trim().is_empty() || url.trim().is_empty() {
            return None;
        }
        sources.push(EventSource {
            label: label.trim().to_string(),
            url: url.trim().to_string(),
        });
    }
    if sources.is_empty() {
        None
    } else {
        Some(sources)
    }
}
