//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use shower_core::entities::{avatar_color, Gift, Guest, Message};

use super::responses::{GiftResponse, GuestResponse, MessageListResponse, MessageResponse};

// ============================================================================
// Guest Mappers
// ============================================================================

impl From<&Guest> for GuestResponse {
    fn from(guest: &Guest) -> Self {
        Self {
            id: guest.id,
            name: guest.name.clone(),
            confirmed: guest.confirmed,
            confirmed_at: guest.confirmed_at,
            created_at: guest.created_at,
            category: guest.category.clone(),
            initial: guest.initial(),
        }
    }
}

impl From<Guest> for GuestResponse {
    fn from(guest: Guest) -> Self {
        Self::from(&guest)
    }
}

// ============================================================================
// Gift Mappers
// ============================================================================

impl From<&Gift> for GiftResponse {
    fn from(gift: &Gift) -> Self {
        Self {
            id: gift.id.to_string(),
            name: gift.name.clone(),
            description: gift.description.clone(),
            category: gift.category.clone(),
            price_range: gift.price_range.clone(),
            icon: gift.display_icon().to_string(),
            image_url: gift.image_url.clone(),
            product_url: gift.product_url.clone(),
            reservations: gift.reservations.clone(),
            reserved_by: gift.reserved_by.clone(),
            status: gift.status.map(|s| s.as_str().to_string()),
            display_reservations: gift.display_reservations(),
            reservation_summary: gift.reservation_summary(),
            created_at: gift.created_at,
        }
    }
}

impl From<Gift> for GiftResponse {
    fn from(gift: Gift) -> Self {
        Self::from(&gift)
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

impl MessageResponse {
    /// Card for the message shown at `position` in the list
    pub fn at_position(message: &Message, position: usize) -> Self {
        Self {
            id: message.id.to_string(),
            author_name: message.author_name.clone(),
            content: message.content.clone(),
            likes: message.likes,
            created_at: message.created_at,
            initial: message.initial(),
            display_date: message.display_date(),
            avatar_color: avatar_color(position).to_string(),
        }
    }
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self::at_position(message, 0)
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}

impl From<&[Message]> for MessageListResponse {
    fn from(messages: &[Message]) -> Self {
        Self {
            messages: messages
                .iter()
                .enumerate()
                .map(|(i, m)| MessageResponse::at_position(m, i))
                .collect(),
            total: messages.len(),
        }
    }
}
