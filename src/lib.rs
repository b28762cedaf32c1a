//! Vacancy
//!
//! Room booking availability engine: decides whether a stay can be booked,
//! finds a free room for a date range, and reports which dates leave no room
//! available. Persistence sits behind store traits with `PostgreSQL` and
//! in-memory implementations.

pub mod context;
pub mod database;
pub mod domain;
