use crate::entity::rental::RentalStatus;
use crate::entity::vehicle::RateTier;
use crate::services::s3::ObjectStoreError;
use crate::storage::StorageError;
use thiserror::Error;

/// every way an operation on the rental manager can fail
///
/// display strings are written to be shown directly to the operator
/// as a notification, none of these abort the application
#[derive(Error, Debug)]
pub enum Error {
    #[error("rental period must end after it starts")]
    InvalidInterval,

    #[error("vehicle price list has no {0} rate")]
    MissingPriceTier(RateTier),

    #[error("vehicle is not available for the requested period")]
    UnavailableVehicle,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("invalid transition for a {from} rental")]
    InvalidTransition { from: RentalStatus },

    #[error("rental request not found")]
    RequestNotFound,

    #[error("rental request was already resolved")]
    RequestAlreadyResolved,

    #[error("failed to upload drivers license image: {0}")]
    UploadFailed(String),

    #[error("failed to fetch drivers license image: {0}")]
    FetchFailed(String),

    #[error("invalid password")]
    AuthFailed,

    #[error("{0}")]
    ConstraintViolation(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl From<ObjectStoreError> for Error {
    fn from(value: ObjectStoreError) -> Self {
        let is_fetch = matches!(value, ObjectStoreError::SignedUrl(_));
        let reason = value.to_string();

        if is_fetch {
            Error::FetchFailed(reason)
        } else {
            Error::UploadFailed(reason)
        }
    }
}
