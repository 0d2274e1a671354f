// Image voting route
//
// GET /vote/{image_id}/{direction} adjusts the in-memory tally and always
// redirects back to the cats page, whether or not the vote applied.

use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::get,
    Router,
};
use std::sync::Arc;
use whiskers_core::{VoteDirection, VoteTally};

/// App state for vote routes
#[derive(Clone)]
pub struct AppState {
    pub tally: Arc<VoteTally>,
}

impl AppState {
    pub fn new(tally: Arc<VoteTally>) -> Self {
        Self { tally }
    }
}

/// Create vote routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/vote/:image_id/:direction", get(vote))
        .with_state(state)
}

pub async fn vote(
    State(state): State<AppState>,
    Path((image_id, direction)): Path<(String, String)>,
) -> Redirect {
    match VoteDirection::parse(&direction) {
        Some(direction) => match state.tally.vote(&image_id, direction) {
            Some(count) => {
                tracing::debug!(image_id = %image_id, %direction, count, "Vote recorded")
            }
            None => tracing::debug!(image_id = %image_id, "Ignoring vote for unknown image"),
        },
        None => tracing::debug!(direction = %direction, "Ignoring vote with unknown direction"),
    }

    Redirect::to("/cats")
}
