mod common;

use std::fs;
use std::sync::Arc;

use common::{
    customer_dto, day_at, manager, manager_at, rental_dto, request_dto, van_dto, FakeObjectStore,
};
use rental_manager::entity::RentalStatus;

#[test]
fn fresh_directory_is_seeded_with_demo_data() {
    let (manager, _store, dir) = manager();

    assert_eq!(manager.vehicles().len(), 3);
    assert_eq!(manager.customers().len(), 2);
    assert_eq!(manager.rentals().len(), 3);
    assert!(manager.rental_requests().is_empty());
    assert_eq!(manager.bank_account_number(), "CZ12 3456 7890 1234 5678 9012");

    // seeds live in memory until the first change is saved
    assert!(!dir.path().join("vehicles.json").exists());
}

#[test]
fn saved_collections_survive_a_reload() {
    let (mut manager, _store, dir) = manager();

    let vehicle = manager
        .create_vehicle(van_dto("7T7 7777", "WAUZZZ8V5KA000001"))
        .expect("vehicle created");

    manager
        .set_bank_account_number(String::from("CZ99 8888 7777 6666 5555 4444"))
        .expect("account saved");

    manager
        .submit_rental_request(request_dto("karel@example.com"))
        .expect("request recorded");

    let reopened = manager_at(&dir, Arc::new(FakeObjectStore::default()));

    assert_eq!(reopened.vehicles().len(), 4);
    assert!(reopened.vehicle(&vehicle.id).is_ok());
    assert_eq!(reopened.bank_account_number(), "CZ99 8888 7777 6666 5555 4444");
    assert_eq!(reopened.rental_requests().len(), 1);

    // keys that were never written still come from the seeds
    assert_eq!(reopened.customers().len(), 2);
    assert_eq!(reopened.rentals().len(), 3);
}

#[test]
fn reloaded_collections_match_field_for_field() {
    let (mut manager, _store, dir) = manager();

    // touch every collection once so all of them are written out
    let vehicle = manager
        .create_vehicle(van_dto("7T7 7777", "WAUZZZ8V5KA000001"))
        .expect("vehicle created");

    let customer = manager
        .create_customer(customer_dto("milena@example.com"))
        .expect("customer created");

    manager
        .create_rental(rental_dto(&vehicle.id, &customer.id, day_at(1, 9), day_at(2, 9)))
        .expect("rental created");

    manager
        .submit_rental_request(request_dto("karel@example.com"))
        .expect("request recorded");

    let reopened = manager_at(&dir, Arc::new(FakeObjectStore::default()));

    assert_eq!(reopened.vehicles(), manager.vehicles());
    assert_eq!(reopened.customers(), manager.customers());
    assert_eq!(reopened.rentals(), manager.rentals());
    assert_eq!(reopened.rental_requests(), manager.rental_requests());
}

#[test]
fn completed_rental_stays_completed_after_a_reload() {
    let (mut manager, _store, dir) = manager();

    let active = manager
        .rentals()
        .into_iter()
        .find(|rental| rental.status == RentalStatus::Active)
        .expect("seeded active rental");

    manager.complete_rental(&active.id).expect("rental completed");

    let reopened = manager_at(&dir, Arc::new(FakeObjectStore::default()));
    let reloaded = reopened.rental(&active.id).expect("rental reloaded");

    assert_eq!(reloaded.status, RentalStatus::Completed);
}

#[test]
fn corrupt_key_degrades_to_its_seed_without_touching_others() {
    let (mut manager, _store, dir) = manager();

    let vehicle = manager
        .create_vehicle(van_dto("7T7 7777", "WAUZZZ8V5KA000001"))
        .expect("vehicle created");

    manager
        .submit_rental_request(request_dto("karel@example.com"))
        .expect("request recorded");

    fs::write(dir.path().join("rentalRequests.json"), "{ not json").expect("corrupt the file");

    let reopened = manager_at(&dir, Arc::new(FakeObjectStore::default()));

    // the broken key falls back to its seed, the healthy key is untouched
    assert!(reopened.rental_requests().is_empty());
    assert_eq!(reopened.vehicles().len(), 4);
    assert!(reopened.vehicle(&vehicle.id).is_ok());
}

#[test]
fn stored_json_uses_the_camel_case_wire_names() {
    let (mut manager, _store, dir) = manager();

    manager
        .create_vehicle(van_dto("7T7 7777", "WAUZZZ8V5KA000001"))
        .expect("vehicle created");

    let raw = fs::read_to_string(dir.path().join("vehicles.json")).expect("vehicles file written");

    assert!(raw.contains("\"licensePlate\""));
    assert!(raw.contains("\"inMaintenance\""));
    assert!(raw.contains("\"4h\""));
}
