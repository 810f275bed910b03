use aws_config::{Region, SdkConfig};
use serde::Deserialize;
use std::sync::OnceLock;
use tokio::sync::OnceCell;

fn def_is_development() -> bool {
    false
}

fn def_storage_dir() -> String {
    String::from("./rental-manager-data")
}

fn def_aws_region() -> String {
    String::from("us-east-1")
}

fn def_aws_uploads_bucket_name() -> String {
    String::from("rental-manager-uploads")
}

fn def_signed_url_ttl_secs() -> u64 {
    300
}

fn def_operator_password_hash() -> String {
    String::new()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    /// if the application is running in `development` mode
    #[serde(default = "def_is_development")]
    pub is_development: bool,

    /// directory the application data files are stored into
    #[serde(default = "def_storage_dir")]
    pub storage_dir: String,

    /// AWS region
    #[serde(default = "def_aws_region")]
    pub aws_region: String,

    /// AWS S3 bucket used for all uploads by the application
    #[serde(default = "def_aws_uploads_bucket_name")]
    pub aws_uploads_bucket_name: String,

    /// validity period in seconds for signed drivers license image urls
    #[serde(default = "def_signed_url_ttl_secs")]
    pub signed_url_ttl_secs: u64,

    /// bcrypt hash of the shared operator password, logins are refused while empty
    #[serde(default = "def_operator_password_hash")]
    pub operator_password_hash: String,
}

impl AppConfig {
    /// loads the config from the environment variables
    ///
    /// # PANICS
    /// panics if the environment variables could not be loaded, such as when a string value
    /// cannot be parsed to the desired data type, eg:
    ///
    /// ENV_VAR_THAT_SHOULD_BE_BOOL=not_a_bool
    pub fn from_env() -> AppConfig {
        match envy::from_env::<AppConfig>() {
            Ok(config) => {
                if config.is_development {
                    println!("[CFG] {:#?}", config);
                }

                config
            }

            Err(error) => {
                panic!("[CFG] failed to load application config, {:#?}", error)
            }
        }
    }
}

async fn get_aws_config() -> SdkConfig {
    aws_config::from_env()
        .region(Region::new(&app_config().aws_region))
        .load()
        .await
}

/// returns a global read only reference to the app configuration
pub fn app_config() -> &'static AppConfig {
    static INSTANCE: OnceLock<AppConfig> = OnceLock::new();
    INSTANCE.get_or_init(AppConfig::from_env)
}

/// returns a global read only reference to the aws configuration
pub async fn aws_config() -> &'static SdkConfig {
    static INSTANCE: OnceCell<SdkConfig> = OnceCell::const_new();
    INSTANCE.get_or_init(get_aws_config).await
}
