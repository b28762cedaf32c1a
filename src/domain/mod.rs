//! Vacancy Domain Concerns

pub mod bookings;
pub mod errors;
pub mod rooms;

pub use errors::StoreError;
