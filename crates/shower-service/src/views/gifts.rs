//! Gift registry state

use tracing::{error, instrument};
use uuid::Uuid;

use shower_core::entities::Gift;

use crate::services::{categories, GiftService, ServiceContext, ALL_CATEGORIES};

use super::Notice;

/// Registry with a category filter and one reservation form open at a time
pub struct GiftRegistryView {
    ctx: ServiceContext,
    gifts: Vec<Gift>,
    active_category: String,
    open_form: Option<Uuid>,
    draft_name: String,
    loading: bool,
}

impl GiftRegistryView {
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            ctx,
            gifts: Vec::new(),
            active_category: ALL_CATEGORIES.to_string(),
            open_form: None,
            draft_name: String::new(),
            loading: true,
        }
    }

    /// Fetch the registry; a failed read leaves it empty
    #[instrument(skip(self))]
    pub async fn load(&mut self) {
        self.loading = true;
        self.gifts = GiftService::new(&self.ctx)
            .fetch_gifts()
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, "Error loading gifts");
                Vec::new()
            });
        self.loading = false;
    }

    pub fn gifts(&self) -> &[Gift] {
        &self.gifts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `"all"` plus every category present in the loaded gifts
    pub fn categories(&self) -> Vec<String> {
        categories(&self.gifts)
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.active_category = category.into();
    }

    pub fn filtered(&self) -> Vec<&Gift> {
        self.gifts
            .iter()
            .filter(|g| self.active_category == ALL_CATEGORIES || g.category == self.active_category)
            .collect()
    }

    /// Open the reservation form for a gift, closing any other
    pub fn open_form(&mut self, gift_id: Uuid) {
        self.open_form = Some(gift_id);
        self.draft_name.clear();
    }

    pub fn open_form_id(&self) -> Option<Uuid> {
        self.open_form
    }

    pub fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft_name = name.into();
    }

    /// Close the form without reserving
    pub fn cancel_form(&mut self) {
        self.open_form = None;
        self.draft_name.clear();
    }

    /// Reserve the open gift under the draft name
    ///
    /// Returns `Ok(false)` without calling the store when no form is open or
    /// the trimmed name is empty. The form stays open if the call fails.
    #[instrument(skip(self))]
    pub async fn submit_reservation(&mut self) -> Result<bool, Notice> {
        let Some(gift_id) = self.open_form else {
            return Ok(false);
        };
        let name = self.draft_name.trim().to_string();
        if name.is_empty() {
            return Ok(false);
        }

        let updated = GiftService::new(&self.ctx)
            .reserve_gift(gift_id, &name)
            .await
            .map_err(|_| Notice::ReservationFailed)?;

        self.merge(updated);
        self.cancel_form();
        Ok(true)
    }

    /// Remove one name's reservations from a gift
    #[instrument(skip(self))]
    pub async fn remove_reservation(&mut self, gift_id: Uuid, name: &str) -> Result<(), Notice> {
        let updated = GiftService::new(&self.ctx)
            .remove_reservation(gift_id, name)
            .await
            .map_err(|_| Notice::RemovalFailed)?;

        self.merge(updated);
        Ok(())
    }

    fn merge(&mut self, updated: Gift) {
        if let Some(gift) = self.gifts.iter_mut().find(|g| g.id == updated.id) {
            *gift = updated;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shower_store::MemoryStore;

    async fn setup() -> (MemoryStore, GiftRegistryView, Uuid, Uuid) {
        let store = MemoryStore::new();
        let cuna = Gift::new("Cuna", "muebles", "$$$");
        let biberon = Gift::new("Biberón", "alimentación", "$");
        let (cuna_id, biberon_id) = (cuna.id, biberon.id);
        store.insert_gifts(vec![cuna, biberon, Gift::new("Silla", "muebles", "$$")]);

        let ctx = ServiceContext::builder()
            .store(store.clone())
            .event_starts_at(Utc::now())
            .build()
            .unwrap();
        let mut view = GiftRegistryView::new(ctx);
        view.load().await;
        (store, view, cuna_id, biberon_id)
    }

    #[tokio::test]
    async fn test_category_filter() {
        let (_, mut view, _, _) = setup().await;

        let mut categories = view.categories();
        assert_eq!(categories.remove(0), "all");
        categories.sort();
        assert_eq!(categories, vec!["alimentación", "muebles"]);

        assert_eq!(view.filtered().len(), 3);
        view.set_category("muebles");
        assert_eq!(view.filtered().len(), 2);
    }

    #[tokio::test]
    async fn test_opening_a_form_closes_the_other() {
        let (_, mut view, cuna, biberon) = setup().await;

        view.open_form(cuna);
        view.set_draft_name("Ana");
        view.open_form(biberon);
        assert_eq!(view.open_form_id(), Some(biberon));
        assert_eq!(view.draft_name(), "");

        view.cancel_form();
        assert_eq!(view.open_form_id(), None);
    }

    #[tokio::test]
    async fn test_submit_reserves_and_closes() {
        let (_, mut view, cuna, _) = setup().await;

        view.open_form(cuna);
        view.set_draft_name("  Ana  ");
        assert!(view.submit_reservation().await.unwrap());
        assert_eq!(view.open_form_id(), None);

        view.open_form(cuna);
        view.set_draft_name("Ana");
        view.submit_reservation().await.unwrap();

        let gift = view.gifts().iter().find(|g| g.id == cuna).unwrap();
        assert_eq!(gift.reservations, vec!["Ana", "Ana"]);

        view.remove_reservation(cuna, "Ana").await.unwrap();
        let gift = view.gifts().iter().find(|g| g.id == cuna).unwrap();
        assert!(gift.reservations.is_empty());
        assert!(gift.is_available());
    }

    #[tokio::test]
    async fn test_blank_name_is_ignored() {
        let (_, mut view, cuna, _) = setup().await;

        view.open_form(cuna);
        view.set_draft_name("   ");
        assert!(!view.submit_reservation().await.unwrap());
        assert_eq!(view.open_form_id(), Some(cuna));
    }

    #[tokio::test]
    async fn test_failed_reservation_keeps_form() {
        let (store, mut view, cuna, _) = setup().await;
        store.set_unavailable(true);

        view.open_form(cuna);
        view.set_draft_name("Ana");
        let notice = view.submit_reservation().await.unwrap_err();
        assert_eq!(notice, Notice::ReservationFailed);
        assert_eq!(view.open_form_id(), Some(cuna));
        assert_eq!(view.draft_name(), "Ana");
    }
}
