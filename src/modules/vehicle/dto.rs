use crate::entity::vehicle::{PriceList, Vehicle, VehicleStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// --- INPUT

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleDto {
    pub brand: String,

    pub model: String,

    pub year: i16,

    pub license_plate: String,

    pub vin: String,

    #[serde(default)]
    pub pricing: PriceList,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleDto {
    pub brand: Option<String>,

    pub model: Option<String>,

    pub year: Option<i16>,

    pub license_plate: Option<String>,

    pub vin: Option<String>,

    pub in_maintenance: Option<bool>,

    pub pricing: Option<PriceList>,
}

/// used for both creating and replacing a service record entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecordDto {
    pub date: NaiveDate,

    pub description: String,

    /// cost in whole CZK
    pub cost: u32,
}

// --- OUTPUT

/// a vehicle plus the display status derived from the current rentals
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleWithStatus {
    #[serde(flatten)]
    pub vehicle: Vehicle,

    pub status: VehicleStatus,
}
