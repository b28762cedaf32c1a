//! Booking errors.

use jiff::civil::Date;
use thiserror::Error;

use crate::domain::errors::StoreError;

#[derive(Debug, Error)]
pub enum BookingError {
    /// Stays must begin strictly after the current date.
    #[error("start date {start_date} is not after today {today}")]
    StartDateNotInFuture { start_date: Date, today: Date },

    /// A stay cannot end before it begins.
    #[error("start date {start_date} is after end date {end_date}")]
    StartDateAfterEndDate { start_date: Date, end_date: Date },

    /// Occupancy windows must span at least two distinct dates.
    #[error("start date {start_date} is not before end date {end_date}")]
    StartDateNotBeforeEndDate { start_date: Date, end_date: Date },

    #[error("storage error")]
    Store(#[from] StoreError),
}
