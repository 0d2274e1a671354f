// Event domain types
//
// A calendar entry. Field names on the wire match what the calendar
// front-end expects (`allDay` rather than `all_day`).

use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Owner recorded on events created without an explicit `user`.
pub const DEFAULT_USER: &str = "default_user";

/// Calendar event
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Event {
    /// Surrogate key assigned on insert.
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    #[cfg_attr(feature = "openapi", schema(example = "Standup"))]
    pub title: String,
    /// Start of the event. Stored verbatim, not parsed.
    #[cfg_attr(feature = "openapi", schema(example = "2024-01-01T09:00"))]
    pub start: String,
    /// Optional end of the event. Serialized as `null` when absent.
    pub end: Option<String>,
    #[serde(rename = "allDay")]
    pub all_day: bool,
    #[cfg_attr(feature = "openapi", schema(example = "default_user"))]
    pub user: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_wire_format() {
        let event = Event {
            id: 7,
            title: "Standup".to_string(),
            start: "2024-01-01T09:00".to_string(),
            end: None,
            all_day: true,
            user: DEFAULT_USER.to_string(),
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "title": "Standup",
                "start": "2024-01-01T09:00",
                "end": null,
                "allDay": true,
                "user": "default_user"
            })
        );
    }
}
