// Database models (internal, may differ from public DTOs)

use sqlx::FromRow;

// ============================================
// Event models
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EventRow {
    pub id: i64,
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    #[sqlx(rename = "allDay")]
    pub all_day: bool,
    pub user: String,
}

/// Insert payload. Defaults are resolved by the caller before it reaches storage.
#[derive(Debug, Clone)]
pub struct CreateEventRow {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub all_day: bool,
    pub user: String,
}

/// Partial update. `None` leaves the column untouched.
///
/// `end` is nullable, so it carries two levels: `Some(None)` clears the column.
#[derive(Debug, Clone, Default)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub start: Option<String>,
    pub end: Option<Option<String>>,
    pub all_day: Option<bool>,
    pub user: Option<String>,
}
