/// Structured error types for crmctl-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (crmctl-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.
use thiserror::Error;

/// Main error type for store operations
#[derive(Error, Debug)]
pub enum DbError {
    /// Store unreachable or the pooled handle cannot be opened
    #[error("connection error: {source}")]
    Connection { source: sqlx::Error },

    /// Begin/commit failure or statement failure inside a unit of work
    #[error("transaction error while {phase}: {source}")]
    Transaction {
        phase: &'static str,
        source: sqlx::Error,
    },

    /// Select execution or row decoding failed
    #[error("query error: {source}")]
    Query { source: sqlx::Error },

    /// A well-formed statement matched zero rows
    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}

/// Result type alias for crmctl-core operations
pub type Result<T> = std::result::Result<T, DbError>;

impl DbError {
    /// Create a connection error
    pub fn connection(source: sqlx::Error) -> Self {
        Self::Connection { source }
    }

    /// Create a transaction error tagged with the failing phase
    pub fn transaction(phase: &'static str, source: sqlx::Error) -> Self {
        Self::Transaction { phase, source }
    }

    /// Create a query error
    pub fn query(source: sqlx::Error) -> Self {
        Self::Query { source }
    }

    /// Create a not-found error for a record identifier
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }

    /// True for the "matched zero rows" condition, as opposed to an
    /// execution failure. Callers use this to branch on existence.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DbError::not_found("client", 42);
        assert_eq!(err.to_string(), "not found: client 42");

        let err = DbError::transaction("commit", sqlx::Error::PoolClosed);
        assert!(err.to_string().contains("while commit"));
    }

    #[test]
    fn test_is_not_found() {
        assert!(DbError::not_found("client", 1).is_not_found());
        assert!(!DbError::query(sqlx::Error::PoolClosed).is_not_found());
    }
}
