// Calendar event CRUD HTTP routes

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use utoipa::ToSchema;
use whiskers_core::Event;
use whiskers_storage::Database;

use super::common::{ErrorResponse, MessageResponse};
use crate::error::ApiError;
use crate::services::EventService;

/// Request to create a new event
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    /// Title shown on the calendar.
    #[schema(example = "Standup")]
    pub title: String,
    /// Start of the event, stored verbatim.
    #[schema(example = "2024-01-01T09:00")]
    pub start: String,
    /// Optional end of the event.
    #[serde(default)]
    pub end: Option<String>,
    /// Defaults to `true`.
    #[serde(default, rename = "allDay")]
    pub all_day: Option<bool>,
    /// Defaults to `"default_user"`.
    #[serde(default)]
    pub user: Option<String>,
}

/// Request to update an event. Only provided fields will be updated.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    #[serde(default)]
    #[schema(example = "Daily standup")]
    pub title: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    /// Omit to keep the current value; send `null` to clear it.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub end: Option<Option<String>>,
    #[serde(default, rename = "allDay")]
    pub all_day: Option<bool>,
    #[serde(default)]
    pub user: Option<String>,
}

/// Distinguishes a key sent as `null` (`Some(None)`) from an absent key (`None`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(EventService::new(db)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/events", get(list_events).post(create_event))
        .route("/api/events/:event_id", put(update_event).delete(delete_event))
        .with_state(state)
}

/// GET /api/events - List all events
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "All events in insertion order", body = Vec<Event>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = state.service.list().await?;
    Ok(Json(events))
}

/// POST /api/events - Create a new event
#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created successfully", body = Event),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    tracing::debug!(title = %req.title, start = %req.start, "Received event data");

    let event = state.service.create(req).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PUT /api/events/{event_id} - Update event
#[utoipa::path(
    put,
    path = "/api/events/{event_id}",
    params(
        ("event_id" = i64, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated successfully", body = Event),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<Event>, ApiError> {
    let event = state
        .service
        .update(event_id, req)
        .await?
        .ok_or(ApiError::NotFound("Event"))?;

    Ok(Json(event))
}

/// DELETE /api/events/{event_id} - Delete event
#[utoipa::path(
    delete,
    path = "/api/events/{event_id}",
    params(
        ("event_id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted", body = MessageResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    if state.service.delete(event_id).await? {
        Ok(Json(MessageResponse::new("Event deleted")))
    } else {
        Err(ApiError::NotFound("Event"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let absent: UpdateEventRequest = serde_json::from_value(json!({"title": "x"})).unwrap();
        assert_eq!(absent.end, None);

        let cleared: UpdateEventRequest = serde_json::from_value(json!({"end": null})).unwrap();
        assert_eq!(cleared.end, Some(None));

        let set: UpdateEventRequest =
            serde_json::from_value(json!({"end": "2024-01-01T10:00"})).unwrap();
        assert_eq!(set.end, Some(Some("2024-01-01T10:00".to_string())));
    }

    #[test]
    fn test_create_request_optional_fields() {
        let req: CreateEventRequest =
            serde_json::from_value(json!({"title": "Standup", "start": "2024-01-01T09:00"}))
                .unwrap();
        assert_eq!(req.end, None);
        assert_eq!(req.all_day, None);
        assert_eq!(req.user, None);

        let req: CreateEventRequest = serde_json::from_value(json!({
            "title": "Offsite",
            "start": "2024-02-01",
            "allDay": false,
            "user": "alice"
        }))
        .unwrap();
        assert_eq!(req.all_day, Some(false));
        assert_eq!(req.user.as_deref(), Some("alice"));
    }

    #[test]
    fn test_create_request_requires_title_and_start() {
        let missing_start =
            serde_json::from_value::<CreateEventRequest>(json!({"title": "Standup"}));
        assert!(missing_start.is_err());

        let missing_title =
            serde_json::from_value::<CreateEventRequest>(json!({"start": "2024-01-01"}));
        assert!(missing_title.is_err());
    }
}
