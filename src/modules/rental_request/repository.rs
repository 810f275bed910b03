use super::dto::SubmitRentalRequestDto;
use crate::entity::{RentalRequest, RentalRequestStatus};
use crate::error::Error;
use chrono::Utc;
use uuid::Uuid;

pub fn find_request<'a>(
    requests: &'a [RentalRequest],
    request_id: &str,
) -> Result<&'a RentalRequest, Error> {
    requests
        .iter()
        .find(|request| request.id == request_id)
        .ok_or(Error::RequestNotFound)
}

/// the request if and only if it was not resolved yet
pub fn find_pending<'a>(
    requests: &'a [RentalRequest],
    request_id: &str,
) -> Result<&'a RentalRequest, Error> {
    let request = find_request(requests, request_id)?;

    if request.status != RentalRequestStatus::Pending {
        return Err(Error::RequestAlreadyResolved);
    }

    Ok(request)
}

pub fn submit_request(
    requests: &mut Vec<RentalRequest>,
    dto: SubmitRentalRequestDto,
) -> RentalRequest {
    let now = Utc::now();

    let request = RentalRequest {
        id: Uuid::new_v4().to_string(),
        created_at: now,
        first_name: dto.first_name,
        last_name: dto.last_name,
        email: dto.email,
        phone: dto.phone,
        id_card_number: dto.id_card_number,
        drivers_license_number: dto.drivers_license_number,
        drivers_license_image_base64: dto.drivers_license_image_base64,
        digital_consent_at: dto.digital_consent.then_some(now),
        status: RentalRequestStatus::Pending,
    };

    requests.push(request.clone());

    request
}

/// flips a pending request to its resolved status
///
/// a request resolved once can never be resolved again, this is the guard
/// that keeps a double approval from creating duplicate records
pub fn resolve_request(
    requests: &mut [RentalRequest],
    request_id: &str,
    status: RentalRequestStatus,
) -> Result<RentalRequest, Error> {
    let request = requests
        .iter_mut()
        .find(|request| request.id == request_id)
        .ok_or(Error::RequestNotFound)?;

    if request.status != RentalRequestStatus::Pending {
        return Err(Error::RequestAlreadyResolved);
    }

    request.status = status;

    Ok(request.clone())
}
