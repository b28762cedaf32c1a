//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database,
    domain::{
        bookings::{BookingManager, store::PgBookingStore},
        rooms::store::{PgRoomStore, RoomStore},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub bookings: BookingManager,
    pub rooms: Arc<dyn RoomStore>,
}

impl AppContext {
    #[must_use]
    pub fn new(bookings: BookingManager, rooms: Arc<dyn RoomStore>) -> Self {
        Self { bookings, rooms }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let rooms: Arc<dyn RoomStore> = Arc::new(PgRoomStore::new(pool.clone()));

        let bookings = BookingManager::new(Arc::new(PgBookingStore::new(pool)), Arc::clone(&rooms));

        Ok(Self::new(bookings, rooms))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use crate::domain::{
        bookings::{
            models::{CustomerId, NewBooking},
            store::InMemoryBookingStore,
        },
        rooms::{
            models::{Room, RoomId},
            store::InMemoryRoomStore,
        },
    };

    use super::*;

    fn context_with_one_room() -> AppContext {
        let rooms: Arc<dyn RoomStore> = Arc::new(InMemoryRoomStore::new(vec![Room {
            id: RoomId::from_i64(1),
            description: "Single".to_string(),
        }]));

        let bookings =
            BookingManager::new(Arc::new(InMemoryBookingStore::new()), Arc::clone(&rooms));

        AppContext::new(bookings, rooms)
    }

    #[tokio::test]
    async fn lists_rooms_through_the_context_handle() -> TestResult {
        let ctx = context_with_one_room();

        let rooms = ctx.rooms.list().await?;

        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, RoomId::from_i64(1));
        assert_eq!(rooms[0].description, "Single");

        Ok(())
    }

    #[tokio::test]
    async fn books_through_the_context_manager() -> TestResult {
        let ctx = context_with_one_room();

        let request =
            NewBooking::new(CustomerId::from_i64(1), date(2025, 5, 20), date(2025, 5, 22));

        let created = ctx.bookings.create_booking(request, date(2025, 5, 12)).await?;

        assert!(created);

        Ok(())
    }
}
