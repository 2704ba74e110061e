//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::{AddOnService, GroupSizeBracket, Package};

use super::calculators::{PriceBreakdown, PriceLine};

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// Itemized add-on service in a quote
#[derive(Debug, Serialize)]
pub struct PriceLineResponse {
    pub service_id: String,
    pub name: String,
    pub price: MoneyResponse,
}

/// Response for a price quote
#[derive(Debug, Serialize)]
pub struct PriceBreakdownResponse {
    pub base_price: MoneyResponse,
    pub services_price: MoneyResponse,
    pub subtotal: MoneyResponse,
    pub discount: MoneyResponse,
    pub total: MoneyResponse,
    pub discount_percent: u32,
    pub has_discount: bool,
    pub lines: Vec<PriceLineResponse>,
}

impl From<&PriceBreakdown> for PriceBreakdownResponse {
    fn from(quote: &PriceBreakdown) -> Self {
        let money = |amount: Decimal| MoneyResponse::new(amount, &quote.currency);
        let line = |l: &PriceLine| PriceLineResponse {
            service_id: l.service_id.clone(),
            name: l.name.clone(),
            price: money(l.price),
        };

        Self {
            base_price: money(quote.base_price),
            services_price: money(quote.services_price),
            subtotal: money(quote.subtotal),
            discount: money(quote.discount),
            total: money(quote.total),
            discount_percent: quote.discount_percent,
            has_discount: quote.has_discount(),
            lines: quote.lines.iter().map(line).collect(),
        }
    }
}

/// Response for the catalog listing
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub currency: String,
    pub packages: &'static [Package],
    pub services: &'static [AddOnService],
    pub group_sizes: &'static [GroupSizeBracket],
}
