// Repository layer for database operations

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

use crate::models::*;
use crate::schema::{CREATE_EVENT_TABLE, DROP_EVENT_TABLE};

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database file at `path`.
    ///
    /// Missing parent directories are created first.
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        tracing::debug!(path = %path.display(), "Opened SQLite database");

        Ok(Self { pool })
    }

    /// Private in-memory database with the schema already created.
    ///
    /// Pinned to a single connection that is never recycled: every SQLite
    /// connection to `:memory:` sees its own empty database.
    pub async fn in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ============================================
    // Schema
    // ============================================

    /// Create the event table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_EVENT_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Drop the event table and create it again, empty.
    pub async fn reset_schema(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(DROP_EVENT_TABLE).execute(&mut *tx).await?;
        sqlx::query(CREATE_EVENT_TABLE).execute(&mut *tx).await?;
        tx.commit().await?;

        tracing::info!("Event table reset");
        Ok(())
    }

    // ============================================
    // Events
    // ============================================

    pub async fn create_event(&self, input: CreateEventRow) -> Result<EventRow> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            INSERT INTO event (title, start, "end", "allDay", "user")
            VALUES (?1, ?2, ?3, ?4, ?5)
            RETURNING id, title, start, "end", "allDay", "user"
            "#,
        )
        .bind(&input.title)
        .bind(&input.start)
        .bind(&input.end)
        .bind(input.all_day)
        .bind(&input.user)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(event_id = row.id, "Inserted event");
        Ok(row)
    }

    pub async fn get_event(&self, id: i64) -> Result<Option<EventRow>> {
        let row = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, start, "end", "allDay", "user"
            FROM event
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    pub async fn list_events(&self) -> Result<Vec<EventRow>> {
        let rows = sqlx::query_as::<_, EventRow>(
            r#"
            SELECT id, title, start, "end", "allDay", "user"
            FROM event
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn update_event(&self, id: i64, input: UpdateEvent) -> Result<Option<EventRow>> {
        // ?4 says whether `end` was supplied at all, ?5 is its (possibly NULL) value
        let (set_end, end) = match input.end {
            Some(end) => (true, end),
            None => (false, None),
        };

        let row = sqlx::query_as::<_, EventRow>(
            r#"
            UPDATE event
            SET
                title = COALESCE(?2, title),
                start = COALESCE(?3, start),
                "end" = CASE WHEN ?4 THEN ?5 ELSE "end" END,
                "allDay" = COALESCE(?6, "allDay"),
                "user" = COALESCE(?7, "user")
            WHERE id = ?1
            RETURNING id, title, start, "end", "allDay", "user"
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.start)
        .bind(set_end)
        .bind(&end)
        .bind(input.all_day)
        .bind(&input.user)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = &row {
            tracing::debug!(event_id = row.id, "Updated event");
        }
        Ok(row)
    }

    pub async fn delete_event(&self, id: i64) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM event
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standup() -> CreateEventRow {
        CreateEventRow {
            title: "Standup".to_string(),
            start: "2024-01-01T09:00".to_string(),
            end: None,
            all_day: true,
            user: "default_user".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let db = Database::in_memory().await.unwrap();

        let first = db.create_event(standup()).await.unwrap();
        let second = db.create_event(standup()).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.title, "Standup");
        assert_eq!(first.end, None);
        assert!(first.all_day);
    }

    #[tokio::test]
    async fn test_list_returns_rows_in_insert_order() {
        let db = Database::in_memory().await.unwrap();
        assert!(db.list_events().await.unwrap().is_empty());

        let a = db.create_event(standup()).await.unwrap();
        let b = db
            .create_event(CreateEventRow {
                title: "Retro".to_string(),
                end: Some("2024-01-05T17:00".to_string()),
                all_day: false,
                user: "alice".to_string(),
                ..standup()
            })
            .await
            .unwrap();

        let rows = db.list_events().await.unwrap();
        assert_eq!(rows, vec![a, b]);
    }

    #[tokio::test]
    async fn test_update_touches_only_supplied_columns() {
        let db = Database::in_memory().await.unwrap();
        let created = db
            .create_event(CreateEventRow {
                end: Some("2024-01-01T09:15".to_string()),
                ..standup()
            })
            .await
            .unwrap();

        let updated = db
            .update_event(
                created.id,
                UpdateEvent {
                    title: Some("Daily standup".to_string()),
                    all_day: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("event should exist");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Daily standup");
        assert!(!updated.all_day);
        assert_eq!(updated.start, created.start);
        assert_eq!(updated.end, created.end);
        assert_eq!(updated.user, created.user);
    }

    #[tokio::test]
    async fn test_update_can_clear_end() {
        let db = Database::in_memory().await.unwrap();
        let created = db
            .create_event(CreateEventRow {
                end: Some("2024-01-01T09:15".to_string()),
                ..standup()
            })
            .await
            .unwrap();

        let updated = db
            .update_event(
                created.id,
                UpdateEvent {
                    end: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.end, None);
        assert_eq!(updated.title, created.title);
    }

    #[tokio::test]
    async fn test_update_missing_event_returns_none() {
        let db = Database::in_memory().await.unwrap();
        let result = db
            .update_event(
                42,
                UpdateEvent {
                    title: Some("Ghost".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_event() {
        let db = Database::in_memory().await.unwrap();
        let created = db.create_event(standup()).await.unwrap();

        assert!(db.delete_event(created.id).await.unwrap());
        assert!(db.get_event(created.id).await.unwrap().is_none());
        // Second delete finds nothing
        assert!(!db.delete_event(created.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_reset_schema_empties_table() {
        let db = Database::in_memory().await.unwrap();
        db.create_event(standup()).await.unwrap();
        db.create_event(standup()).await.unwrap();

        db.reset_schema().await.unwrap();

        assert!(db.list_events().await.unwrap().is_empty());
        // Table is usable again after the reset
        db.create_event(standup()).await.unwrap();
        assert_eq!(db.list_events().await.unwrap().len(), 1);
    }
}
