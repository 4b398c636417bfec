//! Seller Center HTTP Adapter
//!
//! Implementation of `TransportPort` for the seller center REST API with:
//! - HMAC-SHA256 request signing
//! - `ErrorResponse` detection
//! - Retry with exponential backoff for read-only actions

mod config;
mod http_client;
pub mod signing;

pub use config::{
    ConfigError, Credentials, DEFAULT_API_VERSION, DEFAULT_TIMEOUT, RetryConfig,
    SellerCenterConfig,
};
pub use http_client::HttpTransport;
