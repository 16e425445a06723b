//! Axum extractors for request handling
//!
//! Custom extractors for path parameters and validated bodies.

mod path;
mod validated;

pub use path::{GiftIdPath, GiftReservationPath, GuestIdPath, MessageIdPath, ParsedPath};
pub use validated::ValidatedJson;
