//! Simulated payment flow.
//!
//! Stands in for a real gateway: sessions advance on timers and the shipped
//! gateway accepts every charge.

pub mod card;
pub mod gateway;
pub mod responses;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;

pub use card::{format_card_number, format_expiry_date, sanitize_cvv, CardDetails};
pub use gateway::{PaymentGateway, SimulatedGateway};
pub use routes::router;
pub use session::PaymentSession;
pub use state::PaymentStep;
