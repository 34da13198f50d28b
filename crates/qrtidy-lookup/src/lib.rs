//! Product metadata lookup for scanned barcodes.
//!
//! [`ProductResolver`] runs the provider cascade for a classified code. The
//! individual provider clients are public too, for callers that want to hit
//! one provider directly and see its errors.

pub mod error;
mod http;
mod labels;
pub mod providers;
mod resolver;

pub use error::LookupError;
pub use http::build_http_client;
pub use providers::{
    Endpoints, GoogleBooksClient, OpenBdClient, RakutenBooksClient, RakutenIchibaClient,
    YahooShoppingClient,
};
pub use resolver::ProductResolver;
