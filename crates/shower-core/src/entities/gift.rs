//! Gift entity - a registry item that any number of guests may reserve

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Icon shown when a gift carries neither an image nor an icon
pub const DEFAULT_GIFT_ICON: &str = "🐣";

/// Legacy single-reservation status
///
/// Kept for older consumers only; always recomputed from the reservation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GiftStatus {
    Available,
    Reserved,
    #[serde(other)]
    Unknown,
}

impl GiftStatus {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Unknown => "unknown",
        }
    }

    /// Parse from the stored string, unknown values map to `Unknown`
    pub fn parse(s: &str) -> Self {
        match s {
            "available" => Self::Available,
            "reserved" => Self::Reserved,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for GiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gift entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price_range: String,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub product_url: Option<String>,
    /// Names of everyone who reserved this gift, in reservation order.
    /// The same name may appear more than once.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reservations: Vec<String>,
    pub reserved_by: Option<String>,
    pub status: Option<GiftStatus>,
    pub group_members: Option<Vec<String>>,
    pub created_at: Option<DateTime<Utc>>,
}

/// The reservation list together with its legacy projection
///
/// This is exactly what a reserve/unreserve write sends back to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationUpdate {
    pub reservations: Vec<String>,
    pub reserved_by: Option<String>,
    pub status: GiftStatus,
}

impl ReservationUpdate {
    /// Derive the legacy fields from a list whose newest entry is `latest`
    fn appended(reservations: Vec<String>, latest: &str) -> Self {
        Self {
            reservations,
            reserved_by: Some(latest.to_string()),
            status: GiftStatus::Reserved,
        }
    }

    /// Derive the legacy fields after a removal
    fn remaining(reservations: Vec<String>) -> Self {
        let reserved_by = reservations.first().cloned();
        let status = if reservations.is_empty() {
            GiftStatus::Available
        } else {
            GiftStatus::Reserved
        };
        Self {
            reservations,
            reserved_by,
            status,
        }
    }
}

impl Gift {
    /// Create a new unreserved gift
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        price_range: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            category: category.into(),
            price_range: price_range.into(),
            icon: None,
            image_url: None,
            product_url: None,
            reservations: Vec::new(),
            reserved_by: None,
            status: Some(GiftStatus::Available),
            group_members: None,
            created_at: Some(Utc::now()),
        }
    }

    /// Update that appends `name` to the reservation list (no dedup)
    pub fn with_reservation(&self, name: &str) -> ReservationUpdate {
        let mut reservations = self.reservations.clone();
        reservations.push(name.to_string());
        ReservationUpdate::appended(reservations, name)
    }

    /// Update that drops every occurrence of `name` from the reservation list
    pub fn without_reservation(&self, name: &str) -> ReservationUpdate {
        let reservations = self
            .reservations
            .iter()
            .filter(|existing| existing.as_str() != name)
            .cloned()
            .collect();
        ReservationUpdate::remaining(reservations)
    }

    /// Apply a reservation update in place
    pub fn apply(&mut self, update: ReservationUpdate) {
        self.reservations = update.reservations;
        self.reserved_by = update.reserved_by;
        self.status = Some(update.status);
    }

    /// Number of reservations, counting repeated names
    #[inline]
    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    /// Reservations to display, falling back to the legacy single field
    /// for records written before the list existed
    pub fn display_reservations(&self) -> Vec<String> {
        if !self.reservations.is_empty() {
            return self.reservations.clone();
        }
        self.reserved_by.iter().cloned().collect()
    }

    /// Legacy availability: unset or explicitly available
    pub fn is_available(&self) -> bool {
        matches!(self.status, None | Some(GiftStatus::Available))
    }

    /// Icon to render when there is no image
    pub fn display_icon(&self) -> &str {
        self.icon
            .as_deref()
            .filter(|icon| !icon.is_empty())
            .unwrap_or(DEFAULT_GIFT_ICON)
    }

    /// Human-readable reservation count, `None` when nobody reserved
    pub fn reservation_summary(&self) -> Option<String> {
        match self.display_reservations().len() {
            0 => None,
            1 => Some("1 persona ha reservado".to_string()),
            n => Some(format!("{n} personas han reservado")),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
