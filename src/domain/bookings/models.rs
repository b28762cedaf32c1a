//! Booking Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::domain::rooms::models::RoomId;

/// Booking identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(i64);

impl BookingId {
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_i64(self) -> i64 {
        self.0
    }
}

impl Display for BookingId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Customer identifier, opaque to the booking core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn into_i64(self) -> i64 {
        self.0
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Booking Model
///
/// A stay occupies every date from `start_date` through `end_date`, both
/// inclusive. `room_id` stays unset until a room is assigned at placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub start_date: Date,
    pub end_date: Date,
    pub customer_id: CustomerId,
    pub room_id: Option<RoomId>,
    pub is_active: bool,
}

impl Booking {
    /// Whether this stay overlaps the requested range. Boundaries count:
    /// two ranges sharing only a start or end date conflict.
    #[must_use]
    pub fn overlaps(&self, start_date: Date, end_date: Date) -> bool {
        !(self.end_date < start_date || self.start_date > end_date)
    }

    /// Whether `date` falls within this stay, boundaries included.
    #[must_use]
    pub fn covers(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// New Booking Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    pub start_date: Date,
    pub end_date: Date,
    pub customer_id: CustomerId,
    pub room_id: Option<RoomId>,
    pub is_active: bool,
}

impl NewBooking {
    /// A booking request for the given stay, with no room assigned and
    /// inactive until placed.
    #[must_use]
    pub fn new(customer_id: CustomerId, start_date: Date, end_date: Date) -> Self {
        Self {
            start_date,
            end_date,
            customer_id,
            room_id: None,
            is_active: false,
        }
    }
}
