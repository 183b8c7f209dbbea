use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task with ID {0} not found")]
    NotFound(i64),

    #[error("Invalid priority '{0}'. Use H (high), M (medium) or L (low)")]
    InvalidPriority(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CoreError {
    /// True for errors raised before the store is touched.
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::InvalidPriority(_) | CoreError::InvalidInput(_))
    }
}
