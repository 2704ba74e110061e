//! Cultural calendar: festival events and their outbound links.

pub mod events;
pub mod links;
pub mod routes;

pub use events::{all_events, events_in, find_event, CulturalEvent, EventCategory};
pub use links::{google_calendar_url, share_text};
pub use routes::router;
