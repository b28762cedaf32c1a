//! Store errors shared by the domain data access traits.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error")]
    Sql(#[from] sqlx::Error),
}
