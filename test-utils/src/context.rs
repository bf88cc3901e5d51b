use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use tower_sessions::Session;
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Test context containing database connection and session setup.
///
/// Provides an in-memory SQLite database connection and a session backed by
/// the same database for isolated unit testing. Both are created lazily on
/// first access and persist for the lifetime of the test context.
pub struct TestContext {
    /// Database connection to the in-memory SQLite instance, created lazily
    /// by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session instance for session handling, created lazily by `session()`.
    pub session: Option<Session>,

    /// Store backing `session`, kept so tests can reload sessions by id or
    /// exercise expiry deletion.
    pub session_store: Option<SqliteStore>,
}

impl TestContext {
    /// Creates a new empty test context.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
            session_store: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called internally by `TestBuilder::build()` rather than directly.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session instance.
    ///
    /// On first call this initializes the database connection if needed,
    /// creates and migrates the session store table, and creates a fresh
    /// session over that store. Subsequent calls return the same session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError::Database)` - Failed to initialize the session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                // Share the SQLx pool underneath the SeaORM connection
                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                self.session_store = Some(session_store.clone());

                let session = Session::new(None, Arc::new(session_store), None);

                let session_ref = self.session.insert(session);

                Ok(&*session_ref) // Re-borrow as immutable
            }
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Convenience method avoiding borrow checker issues when calling
    /// `database()` and `session()` separately.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - References to both
    /// - `Err(TestError::Database)` - Failed to initialize either
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        // Initialize both (these methods are idempotent)
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
