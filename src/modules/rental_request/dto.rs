use chrono::{DateTime, Utc};
use serde::Deserialize;

// --- INPUT

/// the public reservation form, submitted without authentication
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRentalRequestDto {
    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub phone: String,

    pub id_card_number: String,

    pub drivers_license_number: String,

    /// drivers license image, a raw base64 string or a full `data:` url
    #[serde(default)]
    pub drivers_license_image_base64: Option<String>,

    /// whether the customer ticked the digital contract consent box
    #[serde(default)]
    pub digital_consent: bool,
}

/// filled by the operator when turning a request into a rental
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRentalRequestDto {
    pub vehicle_id: String,

    pub starts_at: DateTime<Utc>,

    pub ends_at: DateTime<Utc>,

    /// agreed price in whole CZK, the suggested price is charged when omitted
    #[serde(default)]
    pub total_price: Option<u32>,
}
