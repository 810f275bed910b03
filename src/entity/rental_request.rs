use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RentalRequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// a reservation proposal submitted by a customer, awaiting operator review
///
/// requests are never deleted, approving or rejecting only flips the status
/// so there is always a trail of what was asked for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub id: String,

    pub created_at: DateTime<Utc>,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub phone: String,

    pub id_card_number: String,

    pub drivers_license_number: String,

    /// drivers license image as submitted by the customer, either a raw base64
    /// string or a full `data:` url, uploaded to object storage on approval
    #[serde(default)]
    pub drivers_license_image_base64: Option<String>,

    /// when the customer accepted the contract terms on the request form
    #[serde(default)]
    pub digital_consent_at: Option<DateTime<Utc>>,

    pub status: RentalRequestStatus,
}
