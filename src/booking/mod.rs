//! Booking flow: the visitor's selection, contact details and the
//! form-validity gate in front of payment.

pub mod contact;
pub mod routes;
pub mod selection;

pub use contact::ContactInfo;
pub use selection::BookingSelection;
pub use routes::router;
