//! Repository implementations
//!
//! Hosted store implementations of the repository traits defined in shower-core.
//! Each repository wraps one table behind the shared [`StoreClient`](crate::StoreClient).

mod error;
mod gift;
mod guest;
mod health;
mod message;

pub use gift::RestGiftRepository;
pub use guest::RestGuestRepository;
pub use health::RestHealthCheck;
pub use message::RestMessageRepository;
