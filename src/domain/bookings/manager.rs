//! Booking Manager

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use jiff::{ToSpan, civil::Date};
use rustc_hash::FxHashSet;
use tracing::{Span, info};

use crate::domain::{
    bookings::{
        errors::BookingError,
        models::{Booking, NewBooking},
        store::BookingStore,
    },
    rooms::{models::RoomId, store::RoomStore},
};

/// Booking Manager
///
/// Decision core for placing stays. Every operation pulls full room and
/// booking snapshots from the stores and applies inclusive date-range logic
/// over them; results are as fresh as the latest snapshot read.
#[derive(Clone)]
pub struct BookingManager {
    bookings: Arc<dyn BookingStore>,
    rooms: Arc<dyn RoomStore>,
}

impl BookingManager {
    #[must_use]
    pub fn new(bookings: Arc<dyn BookingStore>, rooms: Arc<dyn RoomStore>) -> Self {
        Self { bookings, rooms }
    }

    /// Books a stay when a room is free for it.
    ///
    /// Assigns the found room to the request, overriding any caller-supplied
    /// placement, marks it active and persists it. Returns `Ok(false)` and
    /// writes nothing when no room is free. Date validation follows
    /// [`Self::find_available_room`].
    #[tracing::instrument(
        name = "bookings.manager.create_booking",
        skip(self, request),
        fields(
            customer_id = %request.customer_id,
            start_date = %request.start_date,
            end_date = %request.end_date,
            room_id = tracing::field::Empty,
        ),
        err
    )]
    pub async fn create_booking(
        &self,
        request: NewBooking,
        today: Date,
    ) -> Result<bool, BookingError> {
        let available = self
            .find_available_room(request.start_date, request.end_date, today)
            .await?;

        let Some(room_id) = available else {
            return Ok(false);
        };

        let span = Span::current();

        span.record("room_id", tracing::field::display(room_id));

        let placed = NewBooking {
            room_id: Some(room_id),
            is_active: true,
            ..request
        };

        let created = self.bookings.add(placed).await?;

        info!(booking_id = %created.id, "created booking");

        Ok(true)
    }

    /// Finds a room free for the whole of `[start_date, end_date]`.
    ///
    /// The stay must begin strictly after `today` and must not end before it
    /// begins. A room qualifies when none of its active bookings overlap the
    /// requested range; ranges sharing only a boundary date conflict. Returns
    /// the first qualifying room in store order, or `Ok(None)` when every
    /// room is taken.
    pub async fn find_available_room(
        &self,
        start_date: Date,
        end_date: Date,
        today: Date,
    ) -> Result<Option<RoomId>, BookingError> {
        if start_date <= today {
            return Err(BookingError::StartDateNotInFuture { start_date, today });
        }

        if start_date > end_date {
            return Err(BookingError::StartDateAfterEndDate {
                start_date,
                end_date,
            });
        }

        let bookings = self.bookings.list().await?;
        let rooms = self.rooms.list().await?;

        let available = rooms.into_iter().find(|room| {
            !bookings.iter().any(|booking| {
                booking.is_active
                    && booking.room_id == Some(room.id)
                    && booking.overlaps(start_date, end_date)
            })
        });

        Ok(available.map(|room| room.id))
    }

    /// Lists the dates in `[start_date, end_date]` on which every room has
    /// an active booking, ascending.
    ///
    /// A date counts as fully occupied only when the rooms covered by active
    /// bookings on it include every room distinctly; `start_date` must be
    /// strictly before `end_date`.
    pub async fn fully_occupied_dates(
        &self,
        start_date: Date,
        end_date: Date,
    ) -> Result<Vec<Date>, BookingError> {
        if start_date >= end_date {
            return Err(BookingError::StartDateNotBeforeEndDate {
                start_date,
                end_date,
            });
        }

        let rooms = self.rooms.list().await?;

        // The every-room check below is vacuously true with zero rooms.
        if rooms.is_empty() {
            return Ok(Vec::new());
        }

        let bookings = self.bookings.list().await?;

        let active: Vec<&Booking> = bookings.iter().filter(|booking| booking.is_active).collect();

        let dates = start_date
            .series(1.day())
            .take_while(|date| *date <= end_date)
            .filter(|date| {
                let occupied: FxHashSet<RoomId> = active
                    .iter()
                    .filter(|booking| booking.covers(*date))
                    .filter_map(|booking| booking.room_id)
                    .collect();

                rooms.iter().all(|room| occupied.contains(&room.id))
            })
            .collect();

        Ok(dates)
    }
}

impl Debug for BookingManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("BookingManager").finish_non_exhaustive()
    }
}
