//! Entity to model mappers
//!
//! Conversions between domain entities (shower-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `ReservationRow`: Prepare a reservation update for binding

mod gift;
mod guest;
mod message;

pub use gift::ReservationRow;
