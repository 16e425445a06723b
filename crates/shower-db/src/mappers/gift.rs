//! Gift entity <-> model mapper

use shower_core::entities::{Gift, GiftStatus, ReservationUpdate};

use crate::models::GiftModel;

/// Convert GiftModel to Gift entity
///
/// A null reservation list reads as empty.
impl From<GiftModel> for Gift {
    fn from(model: GiftModel) -> Self {
        Gift {
            id: model.id,
            name: model.name,
            description: model.description,
            category: model.category,
            price_range: model.price_range,
            icon: model.icon,
            image_url: model.image_url,
            product_url: model.product_url,
            reservations: model.reservations.unwrap_or_default(),
            reserved_by: model.reserved_by,
            status: model.status.as_deref().map(GiftStatus::parse),
            group_members: model.group_members,
            created_at: model.created_at,
        }
    }
}

/// Column values for a reservation write
pub struct ReservationRow<'a> {
    pub reservations: &'a [String],
    pub reserved_by: Option<&'a str>,
    pub status: &'static str,
}

impl<'a> ReservationRow<'a> {
    pub fn new(update: &'a ReservationUpdate) -> Self {
        Self {
            reservations: &update.reservations,
            reserved_by: update.reserved_by.as_deref(),
            status: update.status.as_str(),
        }
    }
}
