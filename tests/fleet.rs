mod common;

use std::sync::Arc;

use chrono::NaiveDate;
use common::{manager, manager_at, van_dto, FakeObjectStore};
use rental_manager::entity::VehicleStatus;
use rental_manager::modules::vehicle::dto::{ServiceRecordDto, UpdateVehicleDto};
use rental_manager::{Error, RentalManager};

fn vehicle_id_by_plate(manager: &RentalManager, plate: &str) -> String {
    manager
        .vehicles()
        .into_iter()
        .find(|entry| entry.vehicle.license_plate == plate)
        .expect("seeded vehicle present")
        .vehicle
        .id
}

fn vehicle_status(manager: &RentalManager, vehicle_id: &str) -> VehicleStatus {
    manager
        .vehicles()
        .into_iter()
        .find(|entry| entry.vehicle.id == vehicle_id)
        .expect("vehicle present")
        .status
}

#[test]
fn created_vehicle_joins_the_fleet_and_survives_a_reload() {
    let (mut manager, _store, dir) = manager();

    let vehicle = manager
        .create_vehicle(van_dto("7T7 7777", "WAUZZZ8V5KA000001"))
        .expect("vehicle created");

    assert_eq!(manager.vehicles().len(), 4);
    assert_eq!(vehicle_status(&manager, &vehicle.id), VehicleStatus::Available);

    let reopened = manager_at(&dir, Arc::new(FakeObjectStore::default()));
    let reloaded = reopened.vehicle(&vehicle.id).expect("vehicle reloaded");

    assert_eq!(reloaded.license_plate, "7T7 7777");
    assert_eq!(reloaded.pricing, vehicle.pricing);
}

#[test]
fn duplicate_license_plate_is_rejected() {
    let (mut manager, _store, _dir) = manager();

    let result = manager.create_vehicle(van_dto("5B2 1234", "WAUZZZ8V5KA000001"));

    match result {
        Err(Error::ConstraintViolation(reason)) => assert!(reason.contains("license plate")),
        other => panic!("expected a license plate conflict, got {other:?}"),
    }
}

#[test]
fn duplicate_vin_is_rejected() {
    let (mut manager, _store, _dir) = manager();

    let result = manager.create_vehicle(van_dto("7T7 7777", "WF0XXXTTGXGA12345"));

    match result {
        Err(Error::ConstraintViolation(reason)) => assert!(reason.contains("VIN")),
        other => panic!("expected a vin conflict, got {other:?}"),
    }
}

#[test]
fn vehicle_keeps_its_own_identifiers_on_update() {
    let (mut manager, _store, _dir) = manager();
    let vehicle_id = vehicle_id_by_plate(&manager, "5B2 1234");

    let updated = manager
        .update_vehicle(
            &vehicle_id,
            UpdateVehicleDto {
                license_plate: Some(String::from("5B2 1234")),
                brand: Some(String::from("Ford Pro")),
                ..Default::default()
            },
        )
        .expect("own plate is not a conflict");

    assert_eq!(updated.brand, "Ford Pro");
    assert_eq!(updated.license_plate, "5B2 1234");
}

#[test]
fn update_cannot_take_another_vehicles_plate() {
    let (mut manager, _store, _dir) = manager();
    let vehicle_id = vehicle_id_by_plate(&manager, "5B2 1234");

    let result = manager.update_vehicle(
        &vehicle_id,
        UpdateVehicleDto {
            license_plate: Some(String::from("3E9 5678")),
            ..Default::default()
        },
    );

    match result {
        Err(Error::ConstraintViolation(reason)) => assert!(reason.contains("license plate")),
        other => panic!("expected a license plate conflict, got {other:?}"),
    }
}

#[test]
fn maintenance_flag_overrides_the_rental_derived_status() {
    let (mut manager, _store, _dir) = manager();

    // the seeded renault is on an active rental right now
    let vehicle_id = vehicle_id_by_plate(&manager, "1AD 9012");
    assert_eq!(vehicle_status(&manager, &vehicle_id), VehicleStatus::Rented);

    manager
        .update_vehicle(
            &vehicle_id,
            UpdateVehicleDto {
                in_maintenance: Some(true),
                ..Default::default()
            },
        )
        .expect("maintenance flag set");

    assert_eq!(vehicle_status(&manager, &vehicle_id), VehicleStatus::Maintenance);
}

#[test]
fn vehicle_with_rentals_on_record_cannot_be_deleted() {
    let (mut manager, _store, _dir) = manager();

    // the seeded ford only has a completed rental, history still pins it
    let vehicle_id = vehicle_id_by_plate(&manager, "5B2 1234");

    match manager.delete_vehicle(&vehicle_id) {
        Err(Error::ConstraintViolation(reason)) => assert!(reason.contains("rentals")),
        other => panic!("expected a deletion refusal, got {other:?}"),
    }

    assert!(manager.vehicle(&vehicle_id).is_ok());
}

#[test]
fn vehicle_without_rentals_can_be_deleted() {
    let (mut manager, _store, _dir) = manager();

    let vehicle = manager
        .create_vehicle(van_dto("7T7 7777", "WAUZZZ8V5KA000001"))
        .expect("vehicle created");

    manager.delete_vehicle(&vehicle.id).expect("no rentals, deletable");

    match manager.vehicle(&vehicle.id) {
        Err(Error::NotFound(entity)) => assert_eq!(entity, "vehicle"),
        other => panic!("expected the vehicle to be gone, got {other:?}"),
    }
}

#[test]
fn service_records_can_be_added_updated_and_removed() {
    let (mut manager, _store, _dir) = manager();

    let vehicle = manager
        .create_vehicle(van_dto("7T7 7777", "WAUZZZ8V5KA000001"))
        .expect("vehicle created");

    let record = manager
        .add_service_record(
            &vehicle.id,
            ServiceRecordDto {
                date: NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date"),
                description: String::from("brake pads replaced"),
                cost: 180,
            },
        )
        .expect("record added");

    let updated = manager
        .update_service_record(
            &vehicle.id,
            &record.id,
            ServiceRecordDto {
                date: record.date,
                description: String::from("brake pads and discs replaced"),
                cost: 260,
            },
        )
        .expect("record updated");

    assert_eq!(updated.cost, 260);

    manager
        .delete_service_record(&vehicle.id, &record.id)
        .expect("record deleted");

    let reloaded = manager.vehicle(&vehicle.id).expect("vehicle present");
    assert!(reloaded.service_records.is_empty());

    match manager.delete_service_record(&vehicle.id, &record.id) {
        Err(Error::NotFound(entity)) => assert_eq!(entity, "service record"),
        other => panic!("expected the record to be gone, got {other:?}"),
    }
}
