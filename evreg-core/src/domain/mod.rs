use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One validated registration submission, normalized to a fixed field set.
/// `id` stays `None` until the document backend assigns one; the CSV backend
/// never does (row order is the only identity there).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: Option<Uuid>,
    pub full_name: String,
    pub mobile_number: String,
    pub email_id: String,
    pub address: String,
    pub referred_by: Option<String>,
    pub has_interest: bool,
}
