use serde::Deserialize;

// --- INPUT

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub first_name: String,

    pub last_name: String,

    pub email: String,

    pub phone: String,

    pub id_card_number: String,

    pub drivers_license_number: String,

    /// object storage path of an already uploaded license image
    #[serde(default)]
    pub drivers_license_image_path: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerDto {
    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub id_card_number: Option<String>,

    pub drivers_license_number: Option<String>,
}
