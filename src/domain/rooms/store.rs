//! Room Store

use async_trait::async_trait;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::{
    errors::StoreError,
    rooms::models::{Room, RoomId},
};

const LIST_ROOMS_SQL: &str = include_str!("sql/list_rooms.sql");

#[derive(Debug, Clone)]
pub struct PgRoomStore {
    pool: PgPool,
}

impl PgRoomStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomStore for PgRoomStore {
    async fn list(&self) -> Result<Vec<Room>, StoreError> {
        let rooms = query_as::<Postgres, Room>(LIST_ROOMS_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rooms)
    }
}

#[automock]
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Retrieves every room.
    async fn list(&self) -> Result<Vec<Room>, StoreError>;
}

impl<'r> FromRow<'r, PgRow> for Room {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: RoomId::from_i64(row.try_get("id")?),
            description: row.try_get("description")?,
        })
    }
}

/// A fixed set of rooms held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRoomStore {
    rooms: Vec<Room>,
}

impl InMemoryRoomStore {
    #[must_use]
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn list(&self) -> Result<Vec<Room>, StoreError> {
        Ok(self.rooms.clone())
    }
}
