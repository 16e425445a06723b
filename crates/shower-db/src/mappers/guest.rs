//! Guest entity <-> model mapper

use shower_core::entities::Guest;

use crate::models::GuestModel;

/// Convert GuestModel to Guest entity
impl From<GuestModel> for Guest {
    fn from(model: GuestModel) -> Self {
        Guest {
            id: model.id,
            name: model.name,
            confirmed: model.confirmed,
            confirmed_at: model.confirmed_at,
            created_at: model.created_at,
            category: model.category,
        }
    }
}
