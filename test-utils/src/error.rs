use thiserror::Error;

/// Errors that can occur while building a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or execute schema setup.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
