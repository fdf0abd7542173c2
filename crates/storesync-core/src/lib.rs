pub mod app_config;
pub mod config;
pub mod diagnostic;
pub mod products;
pub mod store;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, RequestTimeouts};
pub use config::{load_app_config, load_app_config_from_env};
pub use diagnostic::{ConnectionInfo, DiagnosticResult};
pub use products::{
    NormalizedProduct, ProductAttribute, ProductCategory, ProductDimensions, ProductImage,
    ProductListResult, UpdateResult,
};
pub use store::{StoreConfig, DEFAULT_API_VERSION};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
