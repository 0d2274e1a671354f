// OpenAPI document for the JSON API

use utoipa::OpenApi;
use whiskers_core::Event;

use crate::api::{self, ErrorResponse, MessageResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        api::events::list_events,
        api::events::create_event,
        api::events::update_event,
        api::events::delete_event,
    ),
    components(
        schemas(
            Event,
            api::events::CreateEventRequest,
            api::events::UpdateEventRequest,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "events", description = "Calendar event endpoints")
    ),
    info(
        title = "Whiskers API",
        version = "0.1.0",
        description = "Calendar events backing the Whiskers calendar page",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_event_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/events"));
        assert!(doc.paths.paths.contains_key("/api/events/{event_id}"));
    }
}
