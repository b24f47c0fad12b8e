//! scraper/mod.rs
//!
//! Сервисный слой для сбора данных о местах со страниц продажи билетов.
//!
//! Конвейер: параллельно скачиваем все настроенные страницы, из каждой
//! вырезаем встроенный массив `var seats = [...]`, считаем свободные и
//! занятые места и собираем общий отчет. Сбой одного запроса не роняет
//! остальные: упавшая загрузка превращается в пустой документ, а пустой
//! документ - в нулевую строку отчета.

pub mod aggregate;
pub mod extract;

use futures::future::join_all;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::EventSource;
use crate::models::AggregateReport;

/// Ошибки целого прохода. Частичные сбои (один URL недоступен, разметка
/// без массива мест) поглощаются внутри конвейера и сюда не попадают.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// Ни один из настроенных запросов не дошел до сервера.
    #[error("failed to fetch seat data from every configured source")]
    AllFetchesFailed,
}

/// Клиент для опроса страниц продажи. Один общий `reqwest::Client`
/// на все запросы, порядок событий фиксирован конфигурацией.
#[derive(Clone)]
pub struct SeatScraper {
    client: Client,
    events: Vec<EventSource>,
}

impl SeatScraper {
    pub fn new(events: Vec<EventSource>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, events })
    }

    pub fn events(&self) -> &[EventSource] {
        &self.events
    }

    // Один GET. None только при транспортном сбое; не-2xx ответ отдаем
    // как есть - страница с ошибкой просто не содержит массива мест.
    async fn fetch_page(&self, url: &str) -> Option<String> {
        match self.client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => {
                        debug!("Fetched {} ({}, {} bytes)", url, status, body.len());
                        Some(body)
                    }
                    Err(e) => {
                        warn!("Error reading body from {}: {}", url, e);
                        None
                    }
                }
            }
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                None
            }
        }
    }

    // Все запросы уходят одновременно; ждем завершения каждого из них.
    async fn fetch_all(&self) -> Vec<Option<String>> {
        join_all(self.events.iter().map(|source| self.fetch_page(&source.url))).await
    }

    /// Полный проход: скачать -> извлечь -> агрегировать.
    ///
    /// Возвращает ошибку только когда все загрузки провалились на
    /// транспортном уровне; любой частичный успех дает обычный отчет
    /// (возможно, с нулевыми строками).
    pub async fn collect_report(&self) -> Result<AggregateReport, ScrapeError> {
        let bodies = self.fetch_all().await;

        if !self.events.is_empty() && bodies.iter().all(|body| body.is_none()) {
            return Err(ScrapeError::AllFetchesFailed);
        }

        let per_event = self.events.iter().zip(bodies).map(|(source, body)| {
            let html = body.unwrap_or_default();
            (source, extract::extract_seats(&html))
        });

        Ok(aggregate::summarize(per_event))
    }
}
