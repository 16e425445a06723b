//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Which record collection an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Guests,
    Gifts,
    Messages,
}

impl Collection {
    /// Table name in the store
    pub fn table(&self) -> &'static str {
        match self {
            Self::Guests => "guests",
            Self::Gifts => "gifts",
            Self::Messages => "messages",
        }
    }

    /// Singular label used in messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Guests => "Guest",
            Self::Gifts => "Gift",
            Self::Messages => "Message",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table())
    }
}

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Read Errors
    // =========================================================================
    #[error("Failed to fetch {collection}: {reason}")]
    Fetch {
        collection: Collection,
        reason: String,
    },

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("{} not found: {id}", .collection.label())]
    NotFound { collection: Collection, id: String },

    // =========================================================================
    // Write Errors
    // =========================================================================
    #[error("Failed to write {collection}: {reason}")]
    Write {
        collection: Collection,
        reason: String,
    },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Create a fetch error
    pub fn fetch(collection: Collection, reason: impl ToString) -> Self {
        Self::Fetch {
            collection,
            reason: reason.to_string(),
        }
    }

    /// Create a not found error
    pub fn not_found(collection: Collection, id: impl ToString) -> Self {
        Self::NotFound {
            collection,
            id: id.to_string(),
        }
    }

    /// Create a write error
    pub fn write(collection: Collection, reason: impl ToString) -> Self {
        Self::Write {
            collection,
            reason: reason.to_string(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "FETCH_ERROR",
            Self::NotFound { collection, .. } => match collection {
                Collection::Guests => "UNKNOWN_GUEST",
                Collection::Gifts => "UNKNOWN_GIFT",
                Collection::Messages => "UNKNOWN_MESSAGE",
            },
            Self::Write { .. } => "WRITE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a read failure
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }

    /// Check if this is a write failure
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}
