//! RSVP list state

use tracing::{error, instrument};

use shower_core::entities::Guest;

use crate::services::{GuestService, ServiceContext};

use super::Notice;

/// Guest list with a name search and per-guest confirm/decline
pub struct GuestConfirmationView {
    ctx: ServiceContext,
    guests: Vec<Guest>,
    query: String,
    loading: bool,
}

impl GuestConfirmationView {
    /// Empty view, loading until [`load`](Self::load) completes
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            guests: Vec::new(),
            query: String::new(),
            loading: true,
        }
    }

    /// Fetch the guest list; a failed read leaves the list empty
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.loading = true;
        self.guests = GuestService::new(&self.ctx)
            .fetch_guests()
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, "Error loading guests");
                Vec::new()
            });
        self.loading = false;
    }

    pub fn guests(&self) -> &[Guest] {
        &self.guests
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Guests whose name contains the query, ignoring case
    pub fn filtered(&self) -> Vec<&Guest> {
        self.guests
            .iter()
            .filter(|g| g.matches(&self.query))
            .collect()
    }

    /// Guests who answered yes, over the whole list
    pub fn confirmed_count(&self) -> usize {
        self.guests.iter().filter(|g| g.is_confirmed()).count()
    }

    /// Send the answer for one guest and merge the stored record
    ///
    /// On failure the list is left as it was.
    #[instrument(skip(self))]
    pub async fn set_confirmation(
        &mut self,
        guest_id: i64,
        confirmed: Option<bool>,
    ) -> Result<(), Notice> {
        let updated = GuestService::new(&self.ctx)
            .update_guest_confirmation(guest_id, confirmed)
            .await
            .map_err(|_| Notice::ConfirmationFailed)?;

        if let Some(guest) = self.guests.iter_mut().find(|g| g.id == updated.id) {
            *guest = updated;
        }
        Ok(())
    }
}
