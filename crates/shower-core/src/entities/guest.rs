//! Guest entity - an invited person who can confirm or decline attendance

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Guest entity
///
/// `confirmed` is a tri-state: `Some(true)` confirmed, `Some(false)` declined,
/// `None` not answered yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub name: Option<String>,
    pub confirmed: Option<bool>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub category: Option<String>,
}

/// Field changes written by a confirmation toggle
///
/// `confirmed_at` is `None` when the timestamp must be left untouched,
/// `Some(None)` when it must be cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationChange {
    pub confirmed: Option<bool>,
    pub confirmed_at: Option<Option<DateTime<Utc>>>,
}

impl ConfirmationChange {
    /// Build the change for a new confirmation state at time `now`
    ///
    /// Confirming stamps `now`, resetting to unanswered clears the stamp,
    /// declining leaves whatever stamp the record already carries.
    pub fn new(confirmed: Option<bool>, now: DateTime<Utc>) -> Self {
        let confirmed_at = match confirmed {
            Some(true) => Some(Some(now)),
            None => Some(None),
            Some(false) => None,
        };
        Self {
            confirmed,
            confirmed_at,
        }
    }
}

impl Guest {
    /// Create a new unanswered guest
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            confirmed: None,
            confirmed_at: None,
            created_at: Utc::now(),
            category: None,
        }
    }

    #[inline]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed == Some(true)
    }

    #[inline]
    pub fn is_declined(&self) -> bool {
        self.confirmed == Some(false)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.confirmed.is_none()
    }

    /// Apply a confirmation change in place
    pub fn apply(&mut self, change: ConfirmationChange) {
        self.confirmed = change.confirmed;
        if let Some(confirmed_at) = change.confirmed_at {
            self.confirmed_at = confirmed_at;
        }
    }

    /// Case-insensitive substring match on the guest's name
    ///
    /// Unnamed guests never match, not even the empty query.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
    }

    /// Uppercased first letter of the name, `?` when unnamed
    pub fn initial(&self) -> String {
        self.name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect())
    }
}
