use crate::entity::Rental;
use chrono::{DateTime, Utc};

/// whether a vehicle is free to rent over the candidate period `[starts_at, ends_at)`
///
/// only rentals whose stored status locks the vehicle are considered, completed
/// and pending ones never block, and a rental touching the candidate period
/// (ending exactly when it starts or vice versa) does not collide
///
/// `exclude_rental_id` lets an edit ignore the rental being modified
pub fn is_available(
    vehicle_id: &str,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    rentals: &[Rental],
    exclude_rental_id: Option<&str>,
) -> bool {
    !rentals.iter().any(|rental| {
        rental.vehicle_id == vehicle_id
            && exclude_rental_id != Some(rental.id.as_str())
            && rental.status.blocks_availability()
            && rental.period_overlaps(starts_at, ends_at)
    })
}
