//! Error handling utilities for repositories

use shower_core::error::{Collection, DomainError};
use sqlx::Error as SqlxError;

/// Convert a failed query into a read error
pub fn map_read_error(collection: Collection) -> impl FnOnce(SqlxError) -> DomainError {
    move |e| DomainError::fetch(collection, e)
}

/// Convert a failed statement into a write error
///
/// `RowNotFound` from `fetch_one` after an `UPDATE ... RETURNING` means the
/// id matched nothing.
pub fn map_write_error(
    collection: Collection,
    id: impl ToString,
) -> impl FnOnce(SqlxError) -> DomainError {
    move |e| match e {
        SqlxError::RowNotFound => DomainError::not_found(collection, id),
        e => DomainError::write(collection, e),
    }
}
