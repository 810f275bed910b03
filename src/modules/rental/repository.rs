use super::availability::is_available;
use super::dto::{CreateRentalDto, UpdateRentalDto};
use super::pricing::compute_price;
use crate::entity::{Customer, Rental, RentalStatus, Vehicle};
use crate::error::Error;
use crate::modules::{customer, vehicle};
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub fn find_rental<'a>(rentals: &'a [Rental], rental_id: &str) -> Result<&'a Rental, Error> {
    rentals
        .iter()
        .find(|rental| rental.id == rental_id)
        .ok_or(Error::NotFound("rental"))
}

/// stored status for a rental starting at `starts_at`, the part time alone
/// cannot reproduce later is whether it was already running when created
fn status_snapshot(starts_at: DateTime<Utc>, now: DateTime<Utc>) -> RentalStatus {
    if starts_at <= now {
        RentalStatus::Active
    } else {
        RentalStatus::Upcoming
    }
}

/// creates a rental after checking the vehicle and customer exist, the period
/// is sane and the vehicle is free over it
pub fn create_rental(
    vehicles: &[Vehicle],
    customers: &[Customer],
    rentals: &mut Vec<Rental>,
    dto: CreateRentalDto,
) -> Result<Rental, Error> {
    let vehicle = vehicle::repository::find_vehicle(vehicles, &dto.vehicle_id)?;
    customer::repository::find_customer(customers, &dto.customer_id)?;

    if dto.ends_at <= dto.starts_at {
        return Err(Error::InvalidInterval);
    }

    if !is_available(&dto.vehicle_id, dto.starts_at, dto.ends_at, rentals, None) {
        return Err(Error::UnavailableVehicle);
    }

    let total_price = match dto.total_price {
        Some(price) => price,
        None => compute_price(&vehicle.pricing, dto.starts_at, dto.ends_at)?,
    };

    let now = Utc::now();

    let rental = Rental {
        id: Uuid::new_v4().to_string(),
        vehicle_id: dto.vehicle_id,
        customer_id: dto.customer_id,
        starts_at: dto.starts_at,
        ends_at: dto.ends_at,
        total_price,
        status: status_snapshot(dto.starts_at, now),
        digital_consent_at: dto.digital_consent_at,
        created_at: now,
    };

    rentals.push(rental.clone());

    Ok(rental)
}

/// marks an open rental completed, the one status an operator sets by hand
pub fn complete_rental(rentals: &mut [Rental], rental_id: &str) -> Result<Rental, Error> {
    let rental = rentals
        .iter_mut()
        .find(|rental| rental.id == rental_id)
        .ok_or(Error::NotFound("rental"))?;

    match rental.status {
        RentalStatus::Upcoming | RentalStatus::Active => {
            rental.status = RentalStatus::Completed;
            Ok(rental.clone())
        }
        status => Err(Error::InvalidTransition { from: status }),
    }
}

/// reschedules or reprices an open rental, rechecking availability for the
/// new period while ignoring the rental itself
pub fn update_rental(
    vehicles: &[Vehicle],
    rentals: &mut [Rental],
    rental_id: &str,
    dto: UpdateRentalDto,
) -> Result<Rental, Error> {
    let current = find_rental(rentals, rental_id)?;

    if !current.status.blocks_availability() {
        return Err(Error::InvalidTransition {
            from: current.status,
        });
    }

    let vehicle_id = dto
        .vehicle_id
        .clone()
        .unwrap_or_else(|| current.vehicle_id.clone());
    let starts_at = dto.starts_at.unwrap_or(current.starts_at);
    let ends_at = dto.ends_at.unwrap_or(current.ends_at);

    vehicle::repository::find_vehicle(vehicles, &vehicle_id)?;

    if ends_at <= starts_at {
        return Err(Error::InvalidInterval);
    }

    if !is_available(&vehicle_id, starts_at, ends_at, rentals, Some(rental_id)) {
        return Err(Error::UnavailableVehicle);
    }

    let now = Utc::now();

    let rental = rentals
        .iter_mut()
        .find(|rental| rental.id == rental_id)
        .ok_or(Error::NotFound("rental"))?;

    rental.vehicle_id = vehicle_id;
    rental.starts_at = starts_at;
    rental.ends_at = ends_at;
    rental.status = status_snapshot(starts_at, now);

    if let Some(total_price) = dto.total_price {
        rental.total_price = total_price;
    }

    Ok(rental.clone())
}

/// rentals whose period overlaps the display window `[from, to)`, regardless
/// of status, for the calendar view
pub fn rentals_in_period(
    rentals: &[Rental],
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Vec<Rental> {
    rentals
        .iter()
        .filter(|rental| rental.period_overlaps(from, to))
        .cloned()
        .collect()
}
