//! Pricing engine module for bookings.
//!
//! Quotes are computed server-side from the static catalog; a total sent by a
//! client is never trusted.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::{compute_price, round_money, PriceBreakdown, PriceLine};
pub use responses::MoneyResponse;
pub use routes::router;
