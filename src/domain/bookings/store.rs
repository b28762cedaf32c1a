//! Booking Store

use std::sync::{
    PoisonError, RwLock,
    atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use jiff_sqlx::Date as SqlxDate;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as, query_scalar};

use crate::domain::{
    bookings::models::{Booking, BookingId, CustomerId, NewBooking},
    errors::StoreError,
    rooms::models::RoomId,
};

const LIST_BOOKINGS_SQL: &str = include_str!("sql/list_bookings.sql");
const CREATE_BOOKING_SQL: &str = include_str!("sql/create_booking.sql");

#[derive(Debug, Clone)]
pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn list(&self) -> Result<Vec<Booking>, StoreError> {
        let bookings = query_as::<Postgres, Booking>(LIST_BOOKINGS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(bookings)
    }

    async fn add(&self, booking: NewBooking) -> Result<Booking, StoreError> {
        let id: i64 = query_scalar(CREATE_BOOKING_SQL)
            .bind(SqlxDate::from(booking.start_date))
            .bind(SqlxDate::from(booking.end_date))
            .bind(booking.customer_id.into_i64())
            .bind(booking.room_id.map(RoomId::into_i64))
            .bind(booking.is_active)
            .fetch_one(&self.pool)
            .await?;

        Ok(Booking {
            id: BookingId::from_i64(id),
            start_date: booking.start_date,
            end_date: booking.end_date,
            customer_id: booking.customer_id,
            room_id: booking.room_id,
            is_active: booking.is_active,
        })
    }
}

#[automock]
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Retrieves every booking, active or not.
    async fn list(&self) -> Result<Vec<Booking>, StoreError>;

    /// Persists one booking and returns the stored record.
    async fn add(&self, booking: NewBooking) -> Result<Booking, StoreError>;
}

impl<'r> FromRow<'r, PgRow> for Booking {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: BookingId::from_i64(row.try_get("id")?),
            start_date: row.try_get::<SqlxDate, _>("start_date")?.to_jiff(),
            end_date: row.try_get::<SqlxDate, _>("end_date")?.to_jiff(),
            customer_id: CustomerId::from_i64(row.try_get("customer_id")?),
            room_id: row
                .try_get::<Option<i64>, _>("room_id")?
                .map(RoomId::from_i64),
            is_active: row.try_get("is_active")?,
        })
    }
}

/// An append-only booking collection held in memory, with sequential ids.
#[derive(Debug)]
pub struct InMemoryBookingStore {
    bookings: RwLock<Vec<Booking>>,
    next_id: AtomicI64,
}

impl InMemoryBookingStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            bookings: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryBookingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn list(&self) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .bookings
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn add(&self, booking: NewBooking) -> Result<Booking, StoreError> {
        let id = BookingId::from_i64(self.next_id.fetch_add(1, Ordering::Relaxed));

        let booking = Booking {
            id,
            start_date: booking.start_date,
            end_date: booking.end_date,
            customer_id: booking.customer_id,
            room_id: booking.room_id,
            is_active: booking.is_active,
        };

        self.bookings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(booking.clone());

        Ok(booking)
    }
}
