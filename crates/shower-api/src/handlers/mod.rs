//! Route handlers
//!
//! All HTTP request handlers organized by page section.

pub mod countdown;
pub mod gifts;
pub mod guests;
pub mod health;
pub mod messages;
