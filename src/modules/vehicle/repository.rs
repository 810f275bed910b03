use super::dto::{CreateVehicleDto, ServiceRecordDto, UpdateVehicleDto};
use crate::entity::{Rental, ServiceRecord, Vehicle};
use crate::error::Error;
use chrono::Utc;
use uuid::Uuid;

pub fn find_vehicle<'a>(vehicles: &'a [Vehicle], vehicle_id: &str) -> Result<&'a Vehicle, Error> {
    vehicles
        .iter()
        .find(|vehicle| vehicle.id == vehicle_id)
        .ok_or(Error::NotFound("vehicle"))
}

fn find_vehicle_mut<'a>(
    vehicles: &'a mut [Vehicle],
    vehicle_id: &str,
) -> Result<&'a mut Vehicle, Error> {
    vehicles
        .iter_mut()
        .find(|vehicle| vehicle.id == vehicle_id)
        .ok_or(Error::NotFound("vehicle"))
}

/// asserts no other vehicle on the fleet uses the given plate or VIN
fn assert_unique_identifiers(
    vehicles: &[Vehicle],
    license_plate: &str,
    vin: &str,
    exclude_id: Option<&str>,
) -> Result<(), Error> {
    let conflict = vehicles.iter().find(|vehicle| {
        exclude_id != Some(vehicle.id.as_str())
            && (vehicle.license_plate == license_plate || vehicle.vin == vin)
    });

    match conflict {
        Some(vehicle) if vehicle.vin == vin => Err(Error::ConstraintViolation(format!(
            "a vehicle with VIN {} already exists",
            vin
        ))),
        Some(_) => Err(Error::ConstraintViolation(format!(
            "a vehicle with license plate {} already exists",
            license_plate
        ))),
        None => Ok(()),
    }
}

pub fn create_vehicle(
    vehicles: &mut Vec<Vehicle>,
    dto: CreateVehicleDto,
) -> Result<Vehicle, Error> {
    assert_unique_identifiers(vehicles, &dto.license_plate, &dto.vin, None)?;

    let vehicle = Vehicle {
        id: Uuid::new_v4().to_string(),
        created_at: Utc::now(),
        brand: dto.brand,
        model: dto.model,
        year: dto.year,
        license_plate: dto.license_plate,
        vin: dto.vin,
        in_maintenance: false,
        pricing: dto.pricing,
        service_records: vec![],
    };

    vehicles.push(vehicle.clone());

    Ok(vehicle)
}

pub fn update_vehicle(
    vehicles: &mut [Vehicle],
    vehicle_id: &str,
    dto: UpdateVehicleDto,
) -> Result<Vehicle, Error> {
    let current = find_vehicle(vehicles, vehicle_id)?;

    let license_plate = dto
        .license_plate
        .clone()
        .unwrap_or_else(|| current.license_plate.clone());
    let vin = dto.vin.clone().unwrap_or_else(|| current.vin.clone());

    assert_unique_identifiers(vehicles, &license_plate, &vin, Some(vehicle_id))?;

    let vehicle = find_vehicle_mut(vehicles, vehicle_id)?;

    if let Some(brand) = dto.brand {
        vehicle.brand = brand;
    }
    if let Some(model) = dto.model {
        vehicle.model = model;
    }
    if let Some(year) = dto.year {
        vehicle.year = year;
    }
    if let Some(in_maintenance) = dto.in_maintenance {
        vehicle.in_maintenance = in_maintenance;
    }
    if let Some(pricing) = dto.pricing {
        vehicle.pricing = pricing;
    }

    vehicle.license_plate = license_plate;
    vehicle.vin = vin;

    Ok(vehicle.clone())
}

/// removes a vehicle, refused while any rental still references it so the
/// rental history stays consistent
pub fn delete_vehicle(
    vehicles: &mut Vec<Vehicle>,
    rentals: &[Rental],
    vehicle_id: &str,
) -> Result<(), Error> {
    find_vehicle(vehicles, vehicle_id)?;

    if rentals.iter().any(|rental| rental.vehicle_id == vehicle_id) {
        return Err(Error::ConstraintViolation(String::from(
            "vehicle has rentals on record and cannot be deleted",
        )));
    }

    vehicles.retain(|vehicle| vehicle.id != vehicle_id);

    Ok(())
}

pub fn add_service_record(
    vehicles: &mut [Vehicle],
    vehicle_id: &str,
    dto: ServiceRecordDto,
) -> Result<ServiceRecord, Error> {
    let vehicle = find_vehicle_mut(vehicles, vehicle_id)?;

    let record = ServiceRecord {
        id: Uuid::new_v4().to_string(),
        date: dto.date,
        description: dto.description,
        cost: dto.cost,
    };

    vehicle.service_records.push(record.clone());

    Ok(record)
}

pub fn update_service_record(
    vehicles: &mut [Vehicle],
    vehicle_id: &str,
    record_id: &str,
    dto: ServiceRecordDto,
) -> Result<ServiceRecord, Error> {
    let vehicle = find_vehicle_mut(vehicles, vehicle_id)?;

    let record = vehicle
        .service_records
        .iter_mut()
        .find(|record| record.id == record_id)
        .ok_or(Error::NotFound("service record"))?;

    record.date = dto.date;
    record.description = dto.description;
    record.cost = dto.cost;

    Ok(record.clone())
}

pub fn delete_service_record(
    vehicles: &mut [Vehicle],
    vehicle_id: &str,
    record_id: &str,
) -> Result<(), Error> {
    let vehicle = find_vehicle_mut(vehicles, vehicle_id)?;

    let records_before = vehicle.service_records.len();
    vehicle.service_records.retain(|record| record.id != record_id);

    if vehicle.service_records.len() == records_before {
        return Err(Error::NotFound("service record"));
    }

    Ok(())
}
