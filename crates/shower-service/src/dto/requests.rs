//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies also implement `Validate`.

use serde::{Deserialize, Deserializer};
use validator::Validate;

// ============================================================================
// Guest Requests
// ============================================================================

/// RSVP answer: `true` confirmed, `false` declined, `null` back to unanswered
///
/// The field must be present; an explicit `null` is the only way to reset.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateConfirmationRequest {
    #[serde(default, deserialize_with = "present")]
    #[validate(required(message = "confirmed is required (true, false or null)"))]
    pub confirmed: Option<Option<bool>>,
}

impl UpdateConfirmationRequest {
    /// The tri-state answer once the field is known to be present
    pub fn answer(&self) -> Option<bool> {
        self.confirmed.flatten()
    }
}

/// Distinguishes `"confirmed": null` (`Some(None)`) from a missing field (`None`)
fn present<'de, D>(deserializer: D) -> Result<Option<Option<bool>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Some)
}

/// Guest list query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuestQuery {
    pub q: Option<String>,
}

// ============================================================================
// Gift Requests
// ============================================================================

/// Reserve or release a gift under a name
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReserveGiftRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Gift list query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GiftQuery {
    pub category: Option<String>,
}

// ============================================================================
// Guestbook Requests
// ============================================================================

/// Post a guestbook message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub author_name: String,

    #[validate(length(min = 1, max = 2000, message = "Message must be 1-2000 characters"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_request_accepts_explicit_null() {
        let null: UpdateConfirmationRequest =
            serde_json::from_str(r#"{"confirmed":null}"#).unwrap();
        assert!(null.validate().is_ok());
        assert_eq!(null.answer(), None);

        let declined: UpdateConfirmationRequest =
            serde_json::from_str(r#"{"confirmed":false}"#).unwrap();
        assert!(declined.validate().is_ok());
        assert_eq!(declined.answer(), Some(false));
    }

    #[test]
    fn test_confirmation_request_requires_the_field() {
        let missing: UpdateConfirmationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.confirmed, None);
        assert!(missing.validate().is_err());

        let misspelled = serde_json::from_str::<UpdateConfirmationRequest>(r#"{"confirm":true}"#);
        assert!(misspelled.is_err());
    }

    #[test]
    fn test_reserve_gift_validation() {
        let valid = ReserveGiftRequest {
            name: "Ana".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = ReserveGiftRequest {
            name: String::new(),
        };
        assert!(empty.validate().is_err());

        let too_long = ReserveGiftRequest {
            name: "a".repeat(101),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_create_message_validation() {
        let valid = CreateMessageRequest {
            author_name: "Tía Rosa".to_string(),
            content: "¡Felicidades!".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = CreateMessageRequest {
            author_name: "Tía Rosa".to_string(),
            content: String::new(),
        };
        assert!(empty.validate().is_err());

        let too_long = CreateMessageRequest {
            author_name: "Tía Rosa".to_string(),
            content: "a".repeat(2001),
        };
        assert!(too_long.validate().is_err());
    }
}
