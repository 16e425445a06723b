//! Domain entities - core business objects

mod gift;
mod guest;
mod message;

pub use gift::{Gift, GiftStatus, ReservationUpdate, DEFAULT_GIFT_ICON};
pub use guest::{ConfirmationChange, Guest};
pub use message::{
    avatar_color, format_short_date, sort_newest_first, Message, NewMessage, AVATAR_COLORS,
};
