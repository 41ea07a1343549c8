use crate::common::error::Result;
use crate::domain::Registration;
use async_trait::async_trait;

/// Storage trait for persisting finished registration records.
///
/// Exactly one implementation is active per deployment, selected at startup.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Prepare the backing store. Invoked once at startup, before any write.
    /// The default is a no-op; backends that need no setup keep it.
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    /// Persist one registration. One write attempt, no retries.
    async fn create_registration(&self, registration: &mut Registration) -> Result<()>;
}
