//! Bookings

pub mod errors;
pub mod manager;
pub mod models;
pub mod store;

pub use errors::BookingError;
pub use manager::BookingManager;
pub use store::*;
