use crate::common::error::{RegistrationError, Result};
use libsql::{Builder, Connection, Database};
use std::env;
use tracing::info;

pub struct DatabaseManager {
    db: Database,
}

impl DatabaseManager {
    /// Create a new database manager with a connection to Turso
    pub async fn new() -> Result<Self> {
        let url = env::var("LIBSQL_URL").map_err(|_| RegistrationError::Database {
            message: "LIBSQL_URL environment variable not set".to_string(),
        })?;

        let auth_token = env::var("LIBSQL_AUTH_TOKEN").map_err(|_| RegistrationError::Database {
            message: "LIBSQL_AUTH_TOKEN environment variable not set".to_string(),
        })?;

        info!("Connecting to registration database at {}", url);

        let db = Builder::new_remote(url, auth_token)
            .build()
            .await
            .map_err(|e| RegistrationError::Database {
                message: format!("Failed to connect to database: {e}"),
            })?;

        Ok(Self { db })
    }

    /// Get a connection to the database
    pub async fn get_connection(&self) -> Result<Connection> {
        self.db.connect().map_err(|e| RegistrationError::Database {
            message: format!("Failed to get database connection: {e}"),
        })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        info!("Running database migrations...");

        let conn = self.get_connection().await?;

        let migration_sql = include_str!("../migrations/001_create_registrations.sql");
        conn.execute_batch(migration_sql)
            .await
            .map_err(|e| RegistrationError::Database {
                message: format!("Failed to run registrations migration: {e}"),
            })?;

        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Insert one registration document into the registrations collection.
    /// Plain insert: duplicates are accepted, failures surface immediately.
    pub async fn insert_registration(&self, id: &str, data: &str) -> Result<()> {
        let conn = self.get_connection().await?;

        conn.execute(
            "INSERT INTO registrations (id, data) VALUES (?1, ?2)",
            libsql::params![id, data],
        )
        .await
        .map_err(|e| RegistrationError::Database {
            message: format!("Failed to insert registration: {e}"),
        })?;

        Ok(())
    }
}
