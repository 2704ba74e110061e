//! Pricing API route handlers

use axum::{
    routing::{get, post},
    Json, Router,
};

use crate::catalog;
use crate::AppState;

use super::calculators::compute_price;
use super::requests::QuoteRequest;
use super::responses::{CatalogResponse, PriceBreakdownResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/catalog", get(catalog_listing))
        .route("/api/pricing/quote", post(quote))
}

async fn catalog_listing() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        currency: catalog::DEFAULT_CURRENCY.to_string(),
        packages: &catalog::PACKAGES,
        services: &catalog::SERVICES,
        group_sizes: &catalog::GROUP_SIZES,
    })
}

/// Price a partial selection; never fails
async fn quote(Json(request): Json<QuoteRequest>) -> Json<PriceBreakdownResponse> {
    let breakdown = compute_price(
        request.package_id.as_deref(),
        request.service_ids.iter().map(String::as_str),
        request.group_size.as_deref(),
        catalog::DEFAULT_CURRENCY,
    );
    tracing::debug!(
        "Quote for {:?}: total {}",
        request.package_id,
        breakdown.total
    );

    Json(PriceBreakdownResponse::from(&breakdown))
}
