//! Server-rendered informational pages.

pub mod content;
pub mod routes;

pub use content::NAVIGATION;
pub use routes::{not_found, router};
