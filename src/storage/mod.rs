use crate::entity::{Customer, Rental, RentalRequest, Vehicle};
use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub mod seed;

pub const VEHICLES_KEY: &str = "vehicles";
pub const RENTALS_KEY: &str = "rentals";
pub const CUSTOMERS_KEY: &str = "customers";
pub const RENTAL_REQUESTS_KEY: &str = "rentalRequests";
pub const BANK_ACCOUNT_KEY: &str = "bankAccountNumber";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to serialize storage key {key}: {source}")]
    Serialize {
        key: &'static str,
        source: serde_json::Error,
    },

    #[error("failed to write storage key {key}: {source}")]
    Write {
        key: &'static str,
        source: io::Error,
    },
}

/// local JSON storage, one document per key under a single directory
#[derive(Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Storage { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// reads a key, falling back to `seed` when the document is missing or unparsable
    ///
    /// a corrupt document never fails the application, it is logged and overwritten
    /// by the in memory value on the next save
    pub fn load_or<T, F>(&self, key: &'static str, seed: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let contents = match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => contents,
            Err(error) => {
                if error.kind() != io::ErrorKind::NotFound {
                    tracing::warn!("[STORE] failed to read key {}: {}", key, error);
                }

                return seed();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(
                    "[STORE] corrupt document for key {}, using seed data: {}",
                    key,
                    error
                );

                seed()
            }
        }
    }

    /// writes a key, creating the storage directory on first use
    pub fn save<T: Serialize>(&self, key: &'static str, value: &T) -> Result<(), StorageError> {
        let contents = serde_json::to_vec_pretty(value)
            .map_err(|source| StorageError::Serialize { key, source })?;

        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write { key, source })?;

        fs::write(self.path_for(key), contents)
            .map_err(|source| StorageError::Write { key, source })
    }
}

/// every persisted collection plus the settings, the in memory working set
#[derive(Debug, Clone, PartialEq)]
pub struct AppData {
    pub vehicles: Vec<Vehicle>,
    pub customers: Vec<Customer>,
    pub rentals: Vec<Rental>,
    pub rental_requests: Vec<RentalRequest>,
    pub bank_account_number: String,
}

impl AppData {
    /// loads every key, each one independently seeded when missing or corrupt
    pub fn load(storage: &Storage) -> AppData {
        let now = Utc::now();

        AppData {
            vehicles: storage.load_or(VEHICLES_KEY, || seed::vehicles(now)),
            customers: storage.load_or(CUSTOMERS_KEY, || seed::customers(now)),
            rentals: storage.load_or(RENTALS_KEY, || seed::rentals(now)),
            rental_requests: storage.load_or(RENTAL_REQUESTS_KEY, Vec::new),
            bank_account_number: storage
                .load_or(BANK_ACCOUNT_KEY, || String::from(seed::BANK_ACCOUNT_NUMBER)),
        }
    }
}
