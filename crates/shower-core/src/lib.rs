//! # shower-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (HTTP client, database, web framework).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    avatar_color, format_short_date, sort_newest_first, ConfirmationChange, Gift, GiftStatus,
    Guest, Message, NewMessage, ReservationUpdate, AVATAR_COLORS, DEFAULT_GIFT_ICON,
};
pub use error::{Collection, DomainError};
pub use traits::{GiftRepository, GuestRepository, HealthCheck, MessageRepository, RepoResult};
pub use value_objects::TimeLeft;
