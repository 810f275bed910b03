use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::Display;

use super::rental::Rental;

/// the rental duration buckets a vehicle can be priced by
///
/// every tier except [`RateTier::Daily`] covers a fixed amount of hours,
/// the daily rate is open ended and charged per started day
#[derive(
    Eq,
    Copy,
    Hash,
    Clone,
    Debug,
    Display,
    Serialize,
    PartialEq,
    PartialOrd,
    Ord,
    Deserialize,
)]
pub enum RateTier {
    #[serde(rename = "4h")]
    #[strum(serialize = "4h")]
    FourHours,

    #[serde(rename = "6h")]
    #[strum(serialize = "6h")]
    SixHours,

    #[serde(rename = "12h")]
    #[strum(serialize = "12h")]
    TwelveHours,

    #[serde(rename = "24h")]
    #[strum(serialize = "24h")]
    TwentyFourHours,

    #[serde(rename = "daily")]
    #[strum(serialize = "daily")]
    Daily,
}

impl RateTier {
    /// the amount of minutes covered by the tier, `None` for the open ended daily rate
    pub const fn minutes(self) -> Option<i64> {
        match self {
            RateTier::FourHours => Some(4 * 60),
            RateTier::SixHours => Some(6 * 60),
            RateTier::TwelveHours => Some(12 * 60),
            RateTier::TwentyFourHours => Some(24 * 60),
            RateTier::Daily => None,
        }
    }
}

/// prices in whole CZK per rate tier, eg: `{"4h": 700, "daily": 1300}`
///
/// tiers without an entry are simply not offered for the vehicle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceList(BTreeMap<RateTier, u32>);

impl PriceList {
    pub fn rate(&self, tier: RateTier) -> Option<u32> {
        self.0.get(&tier).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RateTier, u32)> + '_ {
        self.0.iter().map(|(tier, amount)| (*tier, *amount))
    }
}

impl FromIterator<(RateTier, u32)> for PriceList {
    fn from_iter<T: IntoIterator<Item = (RateTier, u32)>>(iter: T) -> Self {
        PriceList(iter.into_iter().collect())
    }
}

/// display status of a vehicle, derived from its maintenance flag and rentals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
}

/// a maintenance or repair entry on a vehicle service history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: String,

    pub date: NaiveDate,

    pub description: String,

    /// cost in whole CZK
    pub cost: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,

    pub created_at: DateTime<Utc>,

    pub brand: String,

    pub model: String,

    pub year: i16,

    pub license_plate: String,

    pub vin: String,

    /// set by the operator while the vehicle is serviced, blocks the available status
    pub in_maintenance: bool,

    pub pricing: PriceList,

    #[serde(default)]
    pub service_records: Vec<ServiceRecord>,
}

impl Vehicle {
    /// display status as of `now`, maintenance wins over an ongoing rental
    pub fn status_at(&self, now: DateTime<Utc>, rentals: &[Rental]) -> VehicleStatus {
        if self.in_maintenance {
            return VehicleStatus::Maintenance;
        }

        let is_rented = rentals.iter().any(|rental| {
            rental.vehicle_id == self.id
                && rental.status_at(now) == super::rental::RentalStatus::Active
        });

        if is_rented {
            VehicleStatus::Rented
        } else {
            VehicleStatus::Available
        }
    }
}
