// Event service for business logic

use anyhow::Result;
use std::sync::Arc;
use whiskers_core::{Event, DEFAULT_USER};
use whiskers_storage::{
    models::{CreateEventRow, UpdateEvent},
    Database, EventRow,
};

use crate::api::events::{CreateEventRequest, UpdateEventRequest};

pub struct EventService {
    db: Arc<Database>,
}

impl EventService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub async fn create(&self, req: CreateEventRequest) -> Result<Event> {
        let input = CreateEventRow {
            title: req.title,
            start: req.start,
            end: req.end,
            all_day: req.all_day.unwrap_or(true),
            user: req.user.unwrap_or_else(|| DEFAULT_USER.to_string()),
        };
        let row = self.db.create_event(input).await?;
        tracing::info!(event_id = row.id, title = %row.title, "Event created");
        Ok(Self::row_to_event(row))
    }

    pub async fn list(&self) -> Result<Vec<Event>> {
        let rows = self.db.list_events().await?;
        Ok(rows.into_iter().map(Self::row_to_event).collect())
    }

    pub async fn update(&self, id: i64, req: UpdateEventRequest) -> Result<Option<Event>> {
        let input = UpdateEvent {
            title: req.title,
            start: req.start,
            end: req.end,
            all_day: req.all_day,
            user: req.user,
        };
        let row = self.db.update_event(id, input).await?;
        Ok(row.map(Self::row_to_event))
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self.db.delete_event(id).await?;
        if deleted {
            tracing::info!(event_id = id, "Event deleted");
        }
        Ok(deleted)
    }

    fn row_to_event(row: EventRow) -> Event {
        Event {
            id: row.id,
            title: row.title,
            start: row.start,
            end: row.end,
            all_day: row.all_day,
            user: row.user,
        }
    }
}
