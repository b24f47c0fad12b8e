use crate::config::EventSource;
use crate::models::{AggregateReport, EventResult, SeatRecord, Summary};

// Процент с одним знаком после запятой, 0.0 при пустом знаменателе
fn percent(free: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = free as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Итог по одному событию: только записи с `type == "seat"`,
/// свободно - когда флаг присутствует и равен `false`.
pub fn summarize_event(source: &EventSource, records: &[SeatRecord]) -> EventResult {
    let seats: Vec<&SeatRecord> = records.iter().filter(|r| r.is_seat()).collect();

    let free = seats.iter().filter(|r| r.is_free()).count() as u32;
    let total = seats.len() as u32;
    let taken = total - free;

    EventResult {
        date: source.label.clone(),
        free,
        taken,
        total,
        free_percent: percent(free, total),
        url: source.url.clone(),
    }
}

/// Сводит результаты всех событий в один отчет, сохраняя порядок
/// конфигурации. Пустой вход дает отчет с нулевой суммой, не ошибку.
pub fn summarize<'a, I>(events: I) -> AggregateReport
where
    I: IntoIterator<Item = (&'a EventSource, Vec<SeatRecord>)>,
{
    let mut results = Vec::new();
    let mut free_total = 0u32;
    let mut taken_total = 0u32;
    let mut all_total = 0u32;

    for (source, records) in events {
        let result = summarize_event(source, &records);
        free_total += result.free;
        taken_total += result.taken;
        all_total += result.total;
        results.push(result);
    }

    AggregateReport {
        events: results,
        summary: Summary {
            free_total,
            taken_total,
            all_total,
            total_percent: percent(free_total, all_total),
        },
    }
}
