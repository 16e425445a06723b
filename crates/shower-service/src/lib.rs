//! # shower-service
//!
//! Application layer: data access operations over the repository traits,
//! request/response DTOs, and the stateful views behind each page section.

pub mod dto;
pub mod services;
pub mod views;

pub use services::{
    CountdownService, GiftService, GuestService, GuestbookService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
pub use views::{
    CountdownView, GiftRegistryView, GuestConfirmationView, GuestbookView, Notice,
};
