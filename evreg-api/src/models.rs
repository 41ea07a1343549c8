use evreg_core::common::error::{RegistrationError, Result};
use evreg_core::domain::Registration;
use serde::Deserialize;

/// Wire-format registration submission. Text fields arrive optional;
/// required-field enforcement happens in [`RegistrationRequest::into_registration`].
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationRequest {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    #[serde(rename = "mobileNumber")]
    pub mobile_number: Option<String>,
    #[serde(rename = "emailId")]
    pub email_id: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "referredBy")]
    pub referred_by: Option<String>,
    #[serde(rename = "hasInterest", default)]
    pub has_interest: bool,
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(RegistrationError::MissingField(field.to_string())),
    }
}

impl RegistrationRequest {
    /// Validate required fields and build the normalized record.
    /// No trimming, no coercion, no format checks on email or phone shape.
    pub fn into_registration(self) -> Result<Registration> {
        Ok(Registration {
            id: None,
            full_name: required(self.full_name, "fullName")?,
            mobile_number: required(self.mobile_number, "mobileNumber")?,
            email_id: required(self.email_id, "emailId")?,
            address: required(self.address, "address")?,
            referred_by: self.referred_by,
            has_interest: self.has_interest,
        })
    }
}
