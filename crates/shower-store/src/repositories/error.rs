//! Error handling utilities for repositories

use shower_core::{Collection, DomainError};

use crate::error::StoreError;

/// Convert a failed read into a domain error
pub fn map_fetch_error(collection: Collection) -> impl FnOnce(StoreError) -> DomainError {
    move |e| DomainError::fetch(collection, e)
}

/// Convert a failed write into a domain error
pub fn map_write_error(collection: Collection) -> impl FnOnce(StoreError) -> DomainError {
    move |e| DomainError::write(collection, e)
}

/// First returned row, or `NotFound` when the filter matched nothing
pub fn single_row<T>(rows: Vec<T>, collection: Collection, id: impl ToString) -> Result<T, DomainError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| DomainError::not_found(collection, id))
}
