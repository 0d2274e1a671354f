// HTTP API routes
//
// JSON endpoints under `/api`. Each submodule handles one resource type with
// its own AppState.

pub mod common;
pub mod events;

// Re-export common types
pub use common::{ErrorResponse, MessageResponse};
