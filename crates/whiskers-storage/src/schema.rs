// SQL DDL for the event table (SQLite)
//
// `end`, `allDay` and `user` are quoted: `end` is a keyword and the other two
// keep the column names the calendar front-end was written against.

pub const DROP_EVENT_TABLE: &str = "DROP TABLE IF EXISTS event";

pub const CREATE_EVENT_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS event (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    start TEXT NOT NULL,
    "end" TEXT NULL,
    "allDay" BOOLEAN NOT NULL DEFAULT 1,
    "user" TEXT NOT NULL DEFAULT 'default_user'
)
"#;

