use crate::config::app_config;
use crate::entity::{
    Customer, Rental, RentalRequest, RentalRequestStatus, RentalStatus, ServiceRecord, Vehicle,
    VehicleStatus,
};
use crate::error::Error;
use crate::modules::auth::service::AuthService;
use crate::modules::common::image_payload;
use crate::modules::customer::dto::{CreateCustomerDto, UpdateCustomerDto};
use crate::modules::rental::dto::{ContractView, CreateRentalDto, UpdateRentalDto};
use crate::modules::rental::{availability, pricing};
use crate::modules::rental_request::dto::{ApproveRentalRequestDto, SubmitRentalRequestDto};
use crate::modules::vehicle::dto::{
    CreateVehicleDto, ServiceRecordDto, UpdateVehicleDto, VehicleWithStatus,
};
use crate::modules::{customer, rental, rental_request, vehicle};
use crate::services::s3::{ObjectKey, ObjectStore, DRIVERS_LICENSES_FOLDER, S3};
use crate::storage::{self, AppData, Storage};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

/// key figures for the dashboard tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub active_rentals: usize,
    pub upcoming_rentals: usize,
    pub total_customers: usize,
    pub pending_requests: usize,
}

/// the application state and every operation the UI can perform on it
///
/// owns the entity collections and the adapters, commands take `&mut self`
/// so two mutations can never interleave on the same manager
pub struct RentalManager {
    data: AppData,
    storage: Storage,
    object_store: Arc<dyn ObjectStore>,
    auth: AuthService,
    signed_url_ttl: Duration,
}

impl RentalManager {
    /// creates a manager over the given adapters, loading (or seeding) the stored data
    pub fn new(
        storage: Storage,
        object_store: Arc<dyn ObjectStore>,
        auth: AuthService,
        signed_url_ttl: Duration,
    ) -> Self {
        let data = AppData::load(&storage);

        tracing::info!(
            "[STORE] loaded {} vehicles, {} customers, {} rentals, {} requests",
            data.vehicles.len(),
            data.customers.len(),
            data.rentals.len(),
            data.rental_requests.len()
        );

        RentalManager {
            data,
            storage,
            object_store,
            auth,
            signed_url_ttl,
        }
    }

    /// wires a manager from the environment config, storing uploads on S3
    pub async fn from_env() -> Self {
        let config = app_config();

        RentalManager::new(
            Storage::new(&config.storage_dir),
            Arc::new(S3::new().await),
            AuthService::new(config.operator_password_hash.clone()),
            Duration::from_secs(config.signed_url_ttl_secs),
        )
    }

    // --- auth

    pub fn login(&mut self, password: &str) -> Result<(), Error> {
        self.auth.login(password)
    }

    pub fn logout(&mut self) {
        self.auth.logout()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    // --- fleet

    /// every vehicle with its display status as of now
    pub fn vehicles(&self) -> Vec<VehicleWithStatus> {
        let now = Utc::now();

        self.data
            .vehicles
            .iter()
            .map(|vehicle| VehicleWithStatus {
                status: vehicle.status_at(now, &self.data.rentals),
                vehicle: vehicle.clone(),
            })
            .collect()
    }

    pub fn vehicle(&self, vehicle_id: &str) -> Result<Vehicle, Error> {
        vehicle::repository::find_vehicle(&self.data.vehicles, vehicle_id).cloned()
    }

    pub fn create_vehicle(&mut self, dto: CreateVehicleDto) -> Result<Vehicle, Error> {
        let vehicle = vehicle::repository::create_vehicle(&mut self.data.vehicles, dto)?;
        self.persist_vehicles()?;

        Ok(vehicle)
    }

    pub fn update_vehicle(
        &mut self,
        vehicle_id: &str,
        dto: UpdateVehicleDto,
    ) -> Result<Vehicle, Error> {
        let vehicle =
            vehicle::repository::update_vehicle(&mut self.data.vehicles, vehicle_id, dto)?;
        self.persist_vehicles()?;

        Ok(vehicle)
    }

    pub fn delete_vehicle(&mut self, vehicle_id: &str) -> Result<(), Error> {
        vehicle::repository::delete_vehicle(
            &mut self.data.vehicles,
            &self.data.rentals,
            vehicle_id,
        )?;

        self.persist_vehicles()
    }

    pub fn add_service_record(
        &mut self,
        vehicle_id: &str,
        dto: ServiceRecordDto,
    ) -> Result<ServiceRecord, Error> {
        let record =
            vehicle::repository::add_service_record(&mut self.data.vehicles, vehicle_id, dto)?;
        self.persist_vehicles()?;

        Ok(record)
    }

    pub fn update_service_record(
        &mut self,
        vehicle_id: &str,
        record_id: &str,
        dto: ServiceRecordDto,
    ) -> Result<ServiceRecord, Error> {
        let record = vehicle::repository::update_service_record(
            &mut self.data.vehicles,
            vehicle_id,
            record_id,
            dto,
        )?;
        self.persist_vehicles()?;

        Ok(record)
    }

    pub fn delete_service_record(
        &mut self,
        vehicle_id: &str,
        record_id: &str,
    ) -> Result<(), Error> {
        vehicle::repository::delete_service_record(&mut self.data.vehicles, vehicle_id, record_id)?;
        self.persist_vehicles()
    }

    // --- customers

    pub fn customers(&self) -> Vec<Customer> {
        self.data.customers.clone()
    }

    pub fn customer(&self, customer_id: &str) -> Result<Customer, Error> {
        customer::repository::find_customer(&self.data.customers, customer_id).cloned()
    }

    pub fn create_customer(&mut self, dto: CreateCustomerDto) -> Result<Customer, Error> {
        let customer = customer::repository::create_customer(&mut self.data.customers, dto);
        self.persist_customers()?;

        Ok(customer)
    }

    pub fn update_customer(
        &mut self,
        customer_id: &str,
        dto: UpdateCustomerDto,
    ) -> Result<Customer, Error> {
        let customer =
            customer::repository::update_customer(&mut self.data.customers, customer_id, dto)?;
        self.persist_customers()?;

        Ok(customer)
    }

    /// short lived signed url for the customers stored drivers license image
    pub async fn customer_license_url(&self, customer_id: &str) -> Result<Url, Error> {
        let customer = customer::repository::find_customer(&self.data.customers, customer_id)?;

        let path = customer
            .drivers_license_image_path
            .clone()
            .ok_or(Error::NotFound("drivers license image"))?;

        Ok(self.object_store.signed_url(path, self.signed_url_ttl).await?)
    }

    // --- rentals

    pub fn rentals(&self) -> Vec<Rental> {
        self.data.rentals.clone()
    }

    pub fn rental(&self, rental_id: &str) -> Result<Rental, Error> {
        rental::repository::find_rental(&self.data.rentals, rental_id).cloned()
    }

    pub fn create_rental(&mut self, dto: CreateRentalDto) -> Result<Rental, Error> {
        let rental = rental::repository::create_rental(
            &self.data.vehicles,
            &self.data.customers,
            &mut self.data.rentals,
            dto,
        )?;
        self.persist_rentals()?;

        Ok(rental)
    }

    pub fn update_rental(
        &mut self,
        rental_id: &str,
        dto: UpdateRentalDto,
    ) -> Result<Rental, Error> {
        let rental = rental::repository::update_rental(
            &self.data.vehicles,
            &mut self.data.rentals,
            rental_id,
            dto,
        )?;
        self.persist_rentals()?;

        Ok(rental)
    }

    pub fn complete_rental(&mut self, rental_id: &str) -> Result<Rental, Error> {
        let rental = rental::repository::complete_rental(&mut self.data.rentals, rental_id)?;
        self.persist_rentals()?;

        Ok(rental)
    }

    /// price the new rental form should suggest for the vehicle and period
    pub fn suggested_price(
        &self,
        vehicle_id: &str,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
    ) -> Result<u32, Error> {
        let vehicle = vehicle::repository::find_vehicle(&self.data.vehicles, vehicle_id)?;

        pricing::compute_price(&vehicle.pricing, starts_at, ends_at)
    }

    pub fn is_vehicle_available(
        &self,
        vehicle_id: &str,
        starts_at: DateTime<Utc>,
        ends_at: DateTime<Utc>,
        exclude_rental_id: Option<&str>,
    ) -> bool {
        availability::is_available(
            vehicle_id,
            starts_at,
            ends_at,
            &self.data.rentals,
            exclude_rental_id,
        )
    }

    /// rentals overlapping the display window, for the calendar view
    pub fn rentals_in_period(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Vec<Rental> {
        rental::repository::rentals_in_period(&self.data.rentals, from, to)
    }

    /// the assembled data for the printable contract of a rental
    pub async fn contract_view(&self, rental_id: &str) -> Result<ContractView, Error> {
        let rental = rental::repository::find_rental(&self.data.rentals, rental_id)?.clone();
        let vehicle =
            vehicle::repository::find_vehicle(&self.data.vehicles, &rental.vehicle_id)?.clone();
        let customer =
            customer::repository::find_customer(&self.data.customers, &rental.customer_id)?.clone();

        let drivers_license_url = match customer.drivers_license_image_path.clone() {
            Some(path) => Some(self.object_store.signed_url(path, self.signed_url_ttl).await?),
            None => None,
        };

        Ok(ContractView {
            rental,
            vehicle,
            customer,
            bank_account_number: self.data.bank_account_number.clone(),
            drivers_license_url,
        })
    }

    // --- rental requests

    pub fn rental_requests(&self) -> Vec<RentalRequest> {
        self.data.rental_requests.clone()
    }

    /// records a reservation request submitted on the public form
    pub fn submit_rental_request(
        &mut self,
        dto: SubmitRentalRequestDto,
    ) -> Result<RentalRequest, Error> {
        let request =
            rental_request::repository::submit_request(&mut self.data.rental_requests, dto);
        self.persist_rental_requests()?;

        Ok(request)
    }

    /// turns a pending request into a customer and a rental
    ///
    /// either all of it happens (license image uploaded, customer created,
    /// rental created, request marked approved) or nothing is kept and the
    /// request stays pending for a retry
    pub async fn approve_request(
        &mut self,
        request_id: &str,
        dto: ApproveRentalRequestDto,
    ) -> Result<(Customer, Rental), Error> {
        let request =
            rental_request::repository::find_pending(&self.data.rental_requests, request_id)?
                .clone();

        let license_path = match &request.drivers_license_image_base64 {
            Some(payload) => Some(self.upload_license_image(payload).await?),
            None => None,
        };

        let customer = customer::repository::create_customer(
            &mut self.data.customers,
            CreateCustomerDto {
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                email: request.email.clone(),
                phone: request.phone.clone(),
                id_card_number: request.id_card_number.clone(),
                drivers_license_number: request.drivers_license_number.clone(),
                drivers_license_image_path: license_path.clone(),
            },
        );

        let created = rental::repository::create_rental(
            &self.data.vehicles,
            &self.data.customers,
            &mut self.data.rentals,
            CreateRentalDto {
                vehicle_id: dto.vehicle_id,
                customer_id: customer.id.clone(),
                starts_at: dto.starts_at,
                ends_at: dto.ends_at,
                total_price: dto.total_price,
                digital_consent_at: request.digital_consent_at,
            },
        );

        let rental = match created {
            Ok(rental) => rental,
            Err(error) => {
                // roll the half finished approval back so the request can be retried
                customer::repository::remove_customer(&mut self.data.customers, &customer.id);

                if let Some(path) = license_path {
                    let _ = self.object_store.delete(path).await;
                }

                return Err(error);
            }
        };

        rental_request::repository::resolve_request(
            &mut self.data.rental_requests,
            request_id,
            RentalRequestStatus::Approved,
        )?;

        self.persist_customers()?;
        self.persist_rentals()?;
        self.persist_rental_requests()?;

        Ok((customer, rental))
    }

    /// declines a pending request, keeping it on record
    pub fn reject_request(&mut self, request_id: &str) -> Result<RentalRequest, Error> {
        let request = rental_request::repository::resolve_request(
            &mut self.data.rental_requests,
            request_id,
            RentalRequestStatus::Rejected,
        )?;
        self.persist_rental_requests()?;

        Ok(request)
    }

    // --- dashboard & settings

    pub fn dashboard_summary(&self) -> DashboardSummary {
        let now = Utc::now();

        let active_rentals = self
            .data
            .rentals
            .iter()
            .filter(|rental| rental.status_at(now) == RentalStatus::Active)
            .count();

        let upcoming_rentals = self
            .data
            .rentals
            .iter()
            .filter(|rental| rental.status_at(now) == RentalStatus::Upcoming)
            .count();

        let available_vehicles = self
            .data
            .vehicles
            .iter()
            .filter(|vehicle| {
                vehicle.status_at(now, &self.data.rentals) == VehicleStatus::Available
            })
            .count();

        let pending_requests = self
            .data
            .rental_requests
            .iter()
            .filter(|request| request.status == RentalRequestStatus::Pending)
            .count();

        DashboardSummary {
            total_vehicles: self.data.vehicles.len(),
            available_vehicles,
            active_rentals,
            upcoming_rentals,
            total_customers: self.data.customers.len(),
            pending_requests,
        }
    }

    pub fn bank_account_number(&self) -> String {
        self.data.bank_account_number.clone()
    }

    pub fn set_bank_account_number(&mut self, bank_account_number: String) -> Result<(), Error> {
        self.data.bank_account_number = bank_account_number;

        Ok(self
            .storage
            .save(storage::BANK_ACCOUNT_KEY, &self.data.bank_account_number)?)
    }

    // --- persistence

    async fn upload_license_image(&self, payload: &str) -> Result<String, Error> {
        let image = image_payload::parse_image_payload(payload)?;

        let key = ObjectKey {
            folder: String::from(DRIVERS_LICENSES_FOLDER),
            filename: format!("{}.{}", Uuid::new_v4(), image.extension),
        };
        let key = String::from(key);

        self.object_store.upload(key.clone(), image.bytes).await?;

        Ok(key)
    }

    fn persist_vehicles(&self) -> Result<(), Error> {
        Ok(self.storage.save(storage::VEHICLES_KEY, &self.data.vehicles)?)
    }

    fn persist_customers(&self) -> Result<(), Error> {
        Ok(self.storage.save(storage::CUSTOMERS_KEY, &self.data.customers)?)
    }

    fn persist_rentals(&self) -> Result<(), Error> {
        Ok(self.storage.save(storage::RENTALS_KEY, &self.data.rentals)?)
    }

    fn persist_rental_requests(&self) -> Result<(), Error> {
        Ok(self
            .storage
            .save(storage::RENTAL_REQUESTS_KEY, &self.data.rental_requests)?)
    }
}
