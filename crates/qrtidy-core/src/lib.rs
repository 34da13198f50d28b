//! Domain types for QR Tidy: scanned-code classification, normalized product
//! metadata, record-field mapping, and environment configuration.

pub mod app_config;
pub mod barcode;
pub mod config;
pub mod error;
pub mod product;
pub mod record;

pub use app_config::{AppConfig, RakutenCredentials};
pub use barcode::{classify, describe, BarcodeKind, CodeClassification};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use product::{ProductInfo, ProductSource, Provider, SupplementField};
pub use record::RecordFields;
