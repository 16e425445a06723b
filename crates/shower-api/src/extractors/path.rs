//! Path parameter extractors
//!
//! Typed extraction of record ids from path parameters, rejecting malformed
//! ids with the API's JSON error body.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};
use uuid::Uuid;

use crate::response::ApiError;

/// Path parameters deserialized into `T`
#[derive(Debug, Clone)]
pub struct ParsedPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ParsedPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(ParsedPath(inner))
    }
}

/// `/guests/:guest_id`
#[derive(Debug, Deserialize)]
pub struct GuestIdPath {
    pub guest_id: i64,
}

/// `/gifts/:gift_id`
#[derive(Debug, Deserialize)]
pub struct GiftIdPath {
    pub gift_id: Uuid,
}

/// `/gifts/:gift_id/reservations/:name`
#[derive(Debug, Deserialize)]
pub struct GiftReservationPath {
    pub gift_id: Uuid,
    pub name: String,
}

/// `/messages/:message_id`
#[derive(Debug, Deserialize)]
pub struct MessageIdPath {
    pub message_id: Uuid,
}
