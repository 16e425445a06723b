//! Ports implemented by the storage backends

mod repositories;

pub use repositories::{
    GiftRepository, GuestRepository, HealthCheck, MessageRepository, RepoResult,
};
