//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

/// Request to price a (possibly partial) booking selection
#[derive(Debug, Default, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub package_id: Option<String>,
    #[serde(default)]
    pub service_ids: Vec<String>,
    #[serde(default)]
    pub group_size: Option<String>,
}
