use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seat_monitor::cache::ReportCache;
use seat_monitor::config::EventSource;
use seat_monitor::scraper::{ScrapeError, SeatScraper};

fn source(label: &str, url: String) -> EventSource {
    EventSource {
        label: label.to_string(),
        url,
    }
}

// Адрес, на котором гарантированно никто не слушает
fn unreachable_url() -> String {
    "http://127.0.0.1:1/overall".to_string()
}

fn seats_page(literal: &str) -> String {
    format!(
        "<html><head><script>var seats = {};</script></head><body>tickets</body></html>",
        literal
    )
}

#[tokio::test]
async fn end_to_end_partial_failure() {
    // Событие A: 3 места (свободно/свободно/занято) + декоративная запись.
    // Событие B: транспортный сбой, трактуется как пустой документ.
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_string(seats_page(
            r#"[
                {"type":"seat","isUnavailable":false},
                {"type":"seat","isUnavailable":false},
                {"type":"seat","isUnavailable":true},
                {"type":"stage","isUnavailable":false}
            ]"#,
        )))
        .mount(&server)
        .await;

    let scraper = SeatScraper::new(vec![
        source("2025-09-28", format!("{}/a", server.uri())),
        source("2025-10-04", unreachable_url()),
    ])
    .unwrap();

    let report = scraper.collect_report().await.unwrap();

    let a = &report.events[0];
    assert_eq!((a.free, a.taken, a.total), (2, 1, 3));
    assert_eq!(a.free_percent, 66.7);

    let b = &report.events[1];
    assert_eq!((b.free, b.taken, b.total), (0, 0, 0));
    assert_eq!(b.free_percent, 0.0);

    assert_eq!(report.summary.free_total, 2);
    assert_eq!(report.summary.taken_total, 1);
    assert_eq!(report.summary.all_total, 3);
    assert_eq!(report.summary.total_percent, 66.7);
}

#[tokio::test]
async fn non_2xx_body_is_still_scanned() {
    // Страница с ошибкой отдается best-effort: тело читаем,
    // массив мест в нем просто не находится
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let scraper =
        SeatScraper::new(vec![source("2025-09-28", format!("{}/a", server.uri()))]).unwrap();
    let report = scraper.collect_report().await.unwrap();

    assert_eq!(report.events[0].total, 0);
    assert_eq!(report.summary.all_total, 0);
}

#[tokio::test]
async fn every_fetch_failing_is_an_error() {
    let scraper = SeatScraper::new(vec![
        source("a", unreachable_url()),
        source("b", unreachable_url()),
    ])
    .unwrap();

    let err = scraper.collect_report().await.unwrap_err();
    assert!(matches!(err, ScrapeError::AllFetchesFailed));
}

#[tokio::test]
async fn no_configured_events_yields_empty_report() {
    let scraper = SeatScraper::new(vec![]).unwrap();
    let report = scraper.collect_report().await.unwrap();
    assert!(report.events.is_empty());
    assert_eq!(report.summary.all_total, 0);
}

#[tokio::test]
async fn fresh_cache_skips_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(seats_page(r#"[{"type":"seat","isUnavailable":false}]"#)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let scraper =
        SeatScraper::new(vec![source("2025-09-28", format!("{}/a", server.uri()))]).unwrap();
    let cache = ReportCache::new(900);

    let first = cache.get_or_refresh(&scraper).await.unwrap();
    let second = cache.get_or_refresh(&scraper).await.unwrap();

    // Второй ответ пришел из кеша: та же метка времени, один запрос наружу
    assert_eq!(first.computed_at, second.computed_at);
    assert_eq!(second.report.summary.free_total, 1);
    server.verify().await;
}

#[tokio::test]
async fn concurrent_stale_reads_collapse_into_one_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(seats_page(r#"[{"type":"seat","isUnavailable":false}]"#))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let scraper =
        SeatScraper::new(vec![source("2025-09-28", format!("{}/a", server.uri()))]).unwrap();
    let cache = ReportCache::new(900);

    let (r1, r2, r3) = tokio::join!(
        cache.get_or_refresh(&scraper),
        cache.get_or_refresh(&scraper),
        cache.get_or_refresh(&scraper),
    );

    let computed_at = r1.unwrap().computed_at;
    assert_eq!(r2.unwrap().computed_at, computed_at);
    assert_eq!(r3.unwrap().computed_at, computed_at);
    server.verify().await;
}

#[tokio::test]
async fn failed_refresh_keeps_previous_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(seats_page(r#"[{"type":"seat","isUnavailable":true}]"#)),
        )
        .mount(&server)
        .await;

    // TTL = 0: каждая читка считает кеш протухшим
    let cache = ReportCache::new(0);

    let good = SeatScraper::new(vec![source("a", format!("{}/a", server.uri()))]).unwrap();
    let primed = cache.get_or_refresh(&good).await.unwrap();

    let bad = SeatScraper::new(vec![source("a", unreachable_url())]).unwrap();
    let err = cache.get_or_refresh(&bad).await.unwrap_err();
    assert!(matches!(err, ScrapeError::AllFetchesFailed));

    // Прежняя запись и ее метка времени не тронуты
    assert_eq!(cache.computed_at().await, Some(primed.computed_at));
    let status = cache.status().await;
    assert_eq!(status.cached_at, Some(primed.computed_at));
}
