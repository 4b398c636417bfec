//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `sellercenter/`: Signed HTTP transport for the seller center API
//! - `telemetry/`: `tracing` subscriber setup for the binary

pub mod sellercenter;
pub mod telemetry;
