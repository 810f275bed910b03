#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use tempfile::TempDir;
use url::Url;

use rental_manager::entity::{PriceList, RateTier};
use rental_manager::modules::auth::service::AuthService;
use rental_manager::modules::customer::dto::CreateCustomerDto;
use rental_manager::modules::rental::dto::CreateRentalDto;
use rental_manager::modules::rental_request::dto::SubmitRentalRequestDto;
use rental_manager::modules::vehicle::dto::CreateVehicleDto;
use rental_manager::services::s3::{ObjectStore, ObjectStoreError};
use rental_manager::storage::Storage;
use rental_manager::RentalManager;

/// object store double that records keys instead of talking to s3
#[derive(Default)]
pub struct FakeObjectStore {
    uploads: Mutex<Vec<String>>,
    deletes: Mutex<Vec<String>>,
}

impl FakeObjectStore {
    pub fn uploaded_keys(&self) -> Vec<String> {
        self.uploads.lock().expect("uploads mutex poisoned").clone()
    }

    pub fn deleted_keys(&self) -> Vec<String> {
        self.deletes.lock().expect("deletes mutex poisoned").clone()
    }
}

#[async_trait]
impl ObjectStore for FakeObjectStore {
    async fn upload(&self, key: String, _bytes: Vec<u8>) -> Result<(), ObjectStoreError> {
        self.uploads.lock().expect("uploads mutex poisoned").push(key);
        Ok(())
    }

    async fn signed_url(
        &self,
        key: String,
        _expires_in: StdDuration,
    ) -> Result<Url, ObjectStoreError> {
        Url::parse(&format!("https://uploads.test/{}", key))
            .map_err(|error| ObjectStoreError::SignedUrl(error.to_string()))
    }

    async fn delete(&self, key: String) -> Result<(), ObjectStoreError> {
        self.deletes.lock().expect("deletes mutex poisoned").push(key);
        Ok(())
    }
}

/// object store double where every upload fails
pub struct RejectingObjectStore;

#[async_trait]
impl ObjectStore for RejectingObjectStore {
    async fn upload(&self, _key: String, _bytes: Vec<u8>) -> Result<(), ObjectStoreError> {
        Err(ObjectStoreError::Upload(String::from("upload refused")))
    }

    async fn signed_url(
        &self,
        _key: String,
        _expires_in: StdDuration,
    ) -> Result<Url, ObjectStoreError> {
        Err(ObjectStoreError::SignedUrl(String::from("upload refused")))
    }

    async fn delete(&self, _key: String) -> Result<(), ObjectStoreError> {
        Ok(())
    }
}

/// manager over a fresh temp dir and a recording object store
pub fn manager() -> (RentalManager, Arc<FakeObjectStore>, TempDir) {
    let dir = TempDir::new().expect("temp dir for storage");
    let store = Arc::new(FakeObjectStore::default());
    let manager = manager_at(&dir, store.clone());

    (manager, store, dir)
}

/// manager over an existing dir, for reload scenarios and store doubles
pub fn manager_at(dir: &TempDir, store: Arc<dyn ObjectStore>) -> RentalManager {
    RentalManager::new(
        Storage::new(dir.path()),
        store,
        AuthService::new(String::new()),
        StdDuration::from_secs(300),
    )
}

/// an instant `days` away from today at `hour:00` utc, so periods land on
/// the intended side of now regardless of when the test runs
pub fn day_at(days: i64, hour: i64) -> DateTime<Utc> {
    let midnight = Utc.from_utc_datetime(&Utc::now().date_naive().and_time(NaiveTime::MIN));

    midnight + Duration::days(days) + Duration::hours(hour)
}

pub fn van_dto(license_plate: &str, vin: &str) -> CreateVehicleDto {
    CreateVehicleDto {
        brand: String::from("Ford"),
        model: String::from("Transit L3H2"),
        year: 2022,
        license_plate: String::from(license_plate),
        vin: String::from(vin),
        pricing: PriceList::from_iter([
            (RateTier::FourHours, 500),
            (RateTier::SixHours, 700),
            (RateTier::TwelveHours, 900),
            (RateTier::TwentyFourHours, 1100),
            (RateTier::Daily, 1000),
        ]),
    }
}

pub fn rental_dto(
    vehicle_id: &str,
    customer_id: &str,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
) -> CreateRentalDto {
    CreateRentalDto {
        vehicle_id: String::from(vehicle_id),
        customer_id: String::from(customer_id),
        starts_at,
        ends_at,
        total_price: None,
        digital_consent_at: None,
    }
}

pub fn customer_dto(email: &str) -> CreateCustomerDto {
    CreateCustomerDto {
        first_name: String::from("Milena"),
        last_name: String::from("Horáková"),
        email: String::from(email),
        phone: String::from("+420 602 555 789"),
        id_card_number: String::from("998877665"),
        drivers_license_number: String::from("C55667788"),
        drivers_license_image_path: None,
    }
}

pub fn request_dto(email: &str) -> SubmitRentalRequestDto {
    SubmitRentalRequestDto {
        first_name: String::from("Karel"),
        last_name: String::from("Dvořák"),
        email: String::from(email),
        phone: String::from("+420 777 123 456"),
        id_card_number: String::from("555444333"),
        drivers_license_number: String::from("B11122333"),
        drivers_license_image_base64: Some(license_image_payload()),
        digital_consent: true,
    }
}

/// tiny valid data url, the shape the public form submits
pub fn license_image_payload() -> String {
    String::from("data:image/png;base64,aGVsbG8gbGljZW5zZQ==")
}
