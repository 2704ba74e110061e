//! Calendar API route handlers

use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::AppState;

use super::events::{self, CulturalEvent};
use super::links;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/calendar/events", get(list))
        .route("/api/calendar/events/:id", get(detail))
}

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    #[serde(default)]
    pub category: Option<String>,
}

/// Event with its outbound links
#[derive(Debug, Serialize)]
pub struct EventDetailResponse {
    #[serde(flatten)]
    pub event: CulturalEvent,
    pub google_calendar_url: String,
    pub share_text: String,
}

async fn list(Query(query): Query<EventListQuery>) -> Json<Vec<CulturalEvent>> {
    Json(events::events_in(query.category.as_deref()))
}

async fn detail(Path(id): Path<u32>) -> Result<Json<EventDetailResponse>, ApiError> {
    let event = events::find_event(id).ok_or(ApiError::EventNotFound(id))?;

    Ok(Json(EventDetailResponse {
        google_calendar_url: links::google_calendar_url(&event),
        share_text: links::share_text(&event),
        event,
    }))
}
