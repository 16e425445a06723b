//! Guest service
//!
//! Lists guests and records their RSVP answers.

use chrono::Utc;
use tracing::{error, info, instrument};

use shower_core::entities::{ConfirmationChange, Guest};

use crate::dto::{GuestListResponse, GuestResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Guest service
pub struct GuestService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuestService<'a> {
    /// Create a new GuestService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All guests ordered by name ascending
    #[instrument(skip(self))]
    pub async fn fetch_guests(&self) -> ServiceResult<Vec<Guest>> {
        let guests = self
            .ctx
            .guest_repo()
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "Error fetching guests"))?;

        Ok(guests)
    }

    /// Set a guest's answer and return the stored record
    ///
    /// Confirming stamps `confirmed_at` with the current time, resetting to
    /// unanswered clears it, declining leaves it as it was.
    #[instrument(skip(self))]
    pub async fn update_guest_confirmation(
        &self,
        guest_id: i64,
        confirmed: Option<bool>,
    ) -> ServiceResult<Guest> {
        let change = ConfirmationChange::new(confirmed, Utc::now());

        let guest = self
            .ctx
            .guest_repo()
            .update_confirmation(guest_id, change)
            .await
            .inspect_err(|e| error!(guest_id, error = %e, "Error updating guest"))?;

        info!(guest_id, ?confirmed, "Guest confirmation updated");
        Ok(guest)
    }

    /// Guest list filtered by name, with the overall confirmed count
    #[instrument(skip(self))]
    pub async fn list(&self, query: Option<&str>) -> ServiceResult<GuestListResponse> {
        let guests = self.fetch_guests().await?;
        let query = query.unwrap_or_default().trim();

        let confirmed_count = guests.iter().filter(|g| g.is_confirmed()).count();
        let filtered: Vec<GuestResponse> = guests
            .iter()
            .filter(|g| g.matches(query))
            .map(GuestResponse::from)
            .collect();

        Ok(GuestListResponse {
            total: guests.len(),
            confirmed_count,
            query: query.to_string(),
            guests: filtered,
        })
    }
}
