//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateMessageRequest, GiftQuery, GuestQuery, ReserveGiftRequest, UpdateConfirmationRequest,
};

pub use responses::{
    ApiResponse, CountdownResponse, CountdownUnit, GiftListResponse, GiftResponse,
    GuestListResponse, GuestResponse, HealthChecks, HealthResponse, MessageListResponse,
    MessageResponse, ReadinessResponse,
};
