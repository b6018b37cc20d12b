//! Storage-specific error type wrapping sqlx errors.

use minimdm_domain::error::MdmError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for MdmError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Whether the error is a `UNIQUE` constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.is_unique_violation())
}
