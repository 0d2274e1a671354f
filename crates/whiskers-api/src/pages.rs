// Server-rendered HTML pages
//
// Every page extends `base.html`; `active` selects the highlighted nav entry.

use askama::Template;
use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;
use whiskers_core::{ImageVotes, VoteTally};

use crate::error::ApiError;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    active: &'static str,
}

#[derive(Template)]
#[template(path = "cats.html")]
struct CatsTemplate {
    active: &'static str,
    votes: Vec<ImageVotes>,
}

#[derive(Template)]
#[template(path = "calendar.html")]
struct CalendarTemplate {
    active: &'static str,
}

/// App state for page routes
#[derive(Clone)]
pub struct AppState {
    pub tally: Arc<VoteTally>,
}

impl AppState {
    pub fn new(tally: Arc<VoteTally>) -> Self {
        Self { tally }
    }
}

/// Create page routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/cats", get(cats))
        .route("/calendar", get(calendar))
        .with_state(state)
}

fn render(template: impl Template) -> Result<Html<String>, ApiError> {
    Ok(Html(template.render()?))
}

pub async fn index() -> Result<Html<String>, ApiError> {
    render(IndexTemplate { active: "home" })
}

pub async fn about() -> Result<Html<String>, ApiError> {
    render(AboutTemplate { active: "about" })
}

pub async fn contact() -> Result<Html<String>, ApiError> {
    render(ContactTemplate { active: "contact" })
}

pub async fn cats(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    render(CatsTemplate {
        active: "cats",
        votes: state.tally.snapshot(),
    })
}

pub async fn calendar() -> Result<Html<String>, ApiError> {
    render(CalendarTemplate { active: "calendar" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use whiskers_core::VoteDirection;

    #[test]
    fn test_cats_page_lists_every_image_with_count() {
        let tally = VoteTally::new();
        tally.vote("image2", VoteDirection::Up);
        tally.vote("image3", VoteDirection::Down);

        let html = CatsTemplate {
            active: "cats",
            votes: tally.snapshot(),
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"id="votes-image1">0<"#));
        assert!(html.contains(r#"id="votes-image2">1<"#));
        assert!(html.contains(r#"id="votes-image3">-1<"#));
        assert!(html.contains(r#"href="/vote/image1/up""#));
        assert!(html.contains(r#"href="/vote/image3/down""#));
    }

    #[test]
    fn test_nav_marks_active_page() {
        let html = AboutTemplate { active: "about" }.render().unwrap();
        assert!(html.contains(r#"<a class="active" href="/about">"#));
        assert!(!html.contains(r#"<a class="active" href="/contact">"#));
    }
}
