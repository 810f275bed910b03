use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,

    pub created_at: DateTime<Utc>,

    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub phone: String,

    /// national id card number
    pub id_card_number: String,

    pub drivers_license_number: String,

    /// object storage path of the uploaded drivers license image, if any
    #[serde(default)]
    pub drivers_license_image_path: Option<String>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
