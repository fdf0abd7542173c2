pub mod client;
pub mod diagnostics;
pub mod error;
pub mod normalize;
pub mod pagination;
pub mod types;

pub use client::{normalize_store_url, CredentialCheck, StoreEndpoints, VersionLookup, WooClient};
pub use diagnostics::{Diagnostic, REQUIRED_NAMESPACE};
pub use error::WooError;
pub use normalize::{normalize_product, normalize_value};
pub use pagination::PageTotals;
pub use types::{ApiRoot, SystemStatus, WooProduct};
