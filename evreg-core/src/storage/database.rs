use super::traits::Storage;
use crate::common::error::{RegistrationError, Result};
use crate::database::DatabaseManager;
use crate::domain::Registration;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Document-store backend using Turso/libSQL: each registration is inserted
/// as a JSON document into the `registrations` collection. No init state;
/// every write is a direct passthrough attempt.
pub struct DatabaseStorage {
    db: Arc<DatabaseManager>,
}

impl DatabaseStorage {
    pub async fn new() -> Result<Self> {
        let db_manager = DatabaseManager::new().await?;
        db_manager.run_migrations().await?;

        Ok(Self {
            db: Arc::new(db_manager),
        })
    }

    fn registration_to_document(registration: &Registration) -> Result<String> {
        serde_json::to_string(registration).map_err(|e| RegistrationError::Database {
            message: format!("Failed to serialize registration: {e}"),
        })
    }
}

#[async_trait]
impl Storage for DatabaseStorage {
    async fn create_registration(&self, registration: &mut Registration) -> Result<()> {
        // Respect an existing ID if provided; otherwise generate
        let id = registration.id.unwrap_or_else(Uuid::new_v4);
        registration.id = Some(id);

        let document = Self::registration_to_document(registration)?;

        self.db
            .insert_registration(&id.to_string(), &document)
            .await?;

        info!(
            "Inserted registration for {} with id {}",
            registration.full_name, id
        );
        Ok(())
    }
}
