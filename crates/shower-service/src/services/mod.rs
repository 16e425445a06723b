//! Business logic services
//!
//! Data access operations for guests, gifts and guestbook messages, plus the
//! countdown. Each service borrows the shared [`ServiceContext`].

pub mod context;
pub mod countdown;
pub mod error;
pub mod gift;
pub mod guest;
pub mod guestbook;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use countdown::CountdownService;
pub use error::{ServiceError, ServiceResult};
pub use gift::{categories, GiftService, ALL_CATEGORIES};
pub use guest::GuestService;
pub use guestbook::GuestbookService;
