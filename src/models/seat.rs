use serde::Deserialize;

// Одна запись из массива `var seats = [...]` на странице продажи.
// Нам нужны только два поля, остальные ключи игнорируются.
#[derive(Debug, Clone, Deserialize)]
pub struct SeatRecord {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    // Отсутствие флага трактуем как "занято" (консервативный дефолт)
    #[serde(rename = "isUnavailable")]
    pub is_unavailable: Option<bool>,
}

impl SeatRecord {
    /// Считается ли запись бронируемым местом (а не декоративным маркером).
    pub fn is_seat(&self) -> bool {
        self.kind.as_deref() == Some("seat")
    }

    /// Место свободно только когда флаг присутствует и равен `false`.
    pub fn is_free(&self) -> bool {
        self.is_unavailable == Some(false)
    }
}
