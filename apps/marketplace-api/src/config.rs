use core_config::{AppInfo, FromEnv, app_info, env_parse, server::ServerConfig};
use database::mongodb::MongoConfig;
use object_storage::S3Config;

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongodb: MongoConfig,
    pub s3: S3Config,
    /// Request body cap for the products group (`PRODUCT_UPLOAD_MAX_BYTES`)
    pub product_upload_max_bytes: usize,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            mongodb: MongoConfig::from_env()?,
            s3: S3Config::from_env()?,
            product_upload_max_bytes: env_parse(
                "PRODUCT_UPLOAD_MAX_BYTES",
                domain_products::DEFAULT_MAX_UPLOAD_BYTES,
            )?,
        })
    }
}
