use crate::entity::{Customer, Rental, Vehicle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

// --- INPUT

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRentalDto {
    pub vehicle_id: String,

    pub customer_id: String,

    pub starts_at: DateTime<Utc>,

    pub ends_at: DateTime<Utc>,

    /// agreed price in whole CZK, the suggested price is charged when omitted
    #[serde(default)]
    pub total_price: Option<u32>,

    #[serde(default)]
    pub digital_consent_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRentalDto {
    pub vehicle_id: Option<String>,

    pub starts_at: Option<DateTime<Utc>>,

    pub ends_at: Option<DateTime<Utc>>,

    pub total_price: Option<u32>,
}

// --- OUTPUT

/// everything the printable rental contract needs in one place
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractView {
    pub rental: Rental,

    pub vehicle: Vehicle,

    pub customer: Customer,

    /// bank account rental payments should be transferred to
    pub bank_account_number: String,

    /// short lived signed url for the stored drivers license image
    pub drivers_license_url: Option<Url>,
}
