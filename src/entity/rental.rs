use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;

/// lifecycle of a rental
///
/// `pending` and `completed` are authoritative, `upcoming` and `active` are a
/// snapshot from creation time, see [`Rental::status_at`] for the live value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RentalStatus {
    Pending,
    Upcoming,
    Active,
    Completed,
}

impl RentalStatus {
    /// whether a rental in this status locks its vehicle for the rented period
    pub const fn blocks_availability(self) -> bool {
        matches!(self, RentalStatus::Upcoming | RentalStatus::Active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,

    pub vehicle_id: String,

    pub customer_id: String,

    pub starts_at: DateTime<Utc>,

    /// exclusive end of the rented period
    pub ends_at: DateTime<Utc>,

    /// agreed price in whole CZK, stored as is and never recomputed
    pub total_price: u32,

    pub status: RentalStatus,

    /// when the customer accepted the contract digitally instead of signing on paper
    pub digital_consent_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
}

impl Rental {
    /// status as of `now`, deriving the time based transitions the stored
    /// snapshot cannot keep up with
    pub fn status_at(&self, now: DateTime<Utc>) -> RentalStatus {
        match self.status {
            RentalStatus::Pending => RentalStatus::Pending,
            RentalStatus::Completed => RentalStatus::Completed,
            RentalStatus::Upcoming | RentalStatus::Active => {
                if now < self.starts_at {
                    RentalStatus::Upcoming
                } else if now < self.ends_at {
                    RentalStatus::Active
                } else {
                    RentalStatus::Completed
                }
            }
        }
    }

    /// half open overlap check against `[starts_at, ends_at)`, touching periods do not overlap
    pub fn period_overlaps(&self, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> bool {
        self.starts_at < ends_at && self.ends_at > starts_at
    }
}
