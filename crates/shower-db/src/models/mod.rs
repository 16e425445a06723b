//! Database models - SQLx-compatible structs for PostgreSQL tables

mod gift;
mod guest;
mod message;

pub use gift::GiftModel;
pub use guest::GuestModel;
pub use message::MessageModel;
