use super::traits::Storage;
use crate::common::error::Result;
use crate::domain::Registration;
use async_trait::async_trait;
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const HEADER: [&str; 7] = [
    "Full Name",
    "Mobile Number",
    "Email ID",
    "Address",
    "Referred By",
    "Has Interest",
    "Timestamp",
];

/// Flat-file storage: one CSV row per registration, appended to a fixed path.
///
/// Every write opens and closes the file, so a failed request never holds a
/// handle open. Single-writer assumption, no locking.
pub struct CsvStorage {
    path: PathBuf,
}

impl CsvStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Storage for CsvStorage {
    /// Idempotent: creates the file with its header row on first call,
    /// leaves an existing file untouched (no truncation, no re-validation).
    async fn init(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(HEADER)?;
        writer.flush()?;
        Ok(())
    }

    async fn create_registration(&self, registration: &mut Registration) -> Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record([
            registration.full_name.as_str(),
            registration.mobile_number.as_str(),
            registration.email_id.as_str(),
            registration.address.as_str(),
            registration.referred_by.as_deref().unwrap_or("N/A"),
            if registration.has_interest { "Yes" } else { "No" },
            timestamp.as_str(),
        ])?;
        writer.flush()?;
        Ok(())
    }
}
