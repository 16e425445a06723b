//! Page state for the four sections of the site
//!
//! Each view owns a [`ServiceContext`](crate::services::ServiceContext) clone,
//! caches what it loaded and replaces records with the store's copy after
//! every mutation.

mod countdown;
mod gifts;
mod guestbook;
mod guests;
mod notice;

pub use countdown::{CountdownView, TICK};
pub use gifts::GiftRegistryView;
pub use guestbook::GuestbookView;
pub use guests::GuestConfirmationView;
pub use notice::Notice;
