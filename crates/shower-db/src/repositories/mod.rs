//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in shower-core.
//! Each repository handles one of the guests, gifts and messages tables.

mod error;
mod gift;
mod guest;
mod health;
mod message;

pub use gift::PgGiftRepository;
pub use guest::PgGuestRepository;
pub use health::PgHealthCheck;
pub use message::PgMessageRepository;
