use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

use crate::models::SeatRecord;

static SEATS_RE: OnceLock<Regex> = OnceLock::new();

// Ленивое, нежадное совпадение: берем первое объявление `var seats = [...]`,
// литерал может занимать несколько строк ((?s) - точка захватывает перенос).
fn seats_re() -> &'static Regex {
    SEATS_RE.get_or_init(|| Regex::new(r"(?s)var\s+seats\s*=\s*(\[.*?\]);").unwrap())
}

/// Вырезает из разметки встроенный массив мест.
///
/// Нет объявления или литерал не разбирается как JSON - возвращаем пустой
/// список. Эта функция никогда не падает: битая страница означает
/// "мест не видно", а не ошибку конвейера.
pub fn extract_seats(html: &str) -> Vec<SeatRecord> {
    let Some(captures) = seats_re().captures(html) else {
        return Vec::new();
    };

    match serde_json::from_str::<Vec<SeatRecord>>(&captures[1]) {
        Ok(records) => records,
        Err(e) => {
            debug!("Seats literal found but failed to parse: {}", e);
            Vec::new()
        }
    }
}
