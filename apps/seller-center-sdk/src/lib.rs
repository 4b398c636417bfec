// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Seller Center SDK
//!
//! Client for the seller center order-management API: fetch orders and
//! order items, move order items through the fulfilment statuses, and list
//! the reasons a status change may be rejected.
//!
//! # Architecture (Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Order records and their enumerations
//!   - `Order`, `OrderItem`, `OrderItemStatusUpdate`, `FailureReason`
//!   - `OrderStatus`, `DeliveryType`, `OrderId`, `OrderItemId`
//!
//! - **Application**: Parameter building, response mapping, the client
//!   - `ports`: `TransportPort`, `RequestIdPort`, `CallLogPort`
//!   - `params`: `ParameterSet` and its builder operations
//!   - `mapper`: XML body to records, selected by `ResponseShape`
//!   - `order_client`: `OrderClient`, one method per remote action
//!
//! - **Infrastructure**: Adapters
//!   - `sellercenter`: Signed HTTP transport (`HttpTransport`)
//!   - `telemetry`: `tracing-subscriber` setup
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use seller_center_sdk::{HttpTransport, ListOptions, OrderClient, SellerCenterConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SellerCenterConfig::from_env()?;
//! let client = OrderClient::new(Arc::new(HttpTransport::new(&config)?));
//! let pending = client
//!     .get_orders_with_status("pending", &ListOptions::default())
//!     .await?;
//! println!("{} pending orders", pending.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Hexagonal Layers
// =============================================================================

/// Domain layer - Order records with no I/O.
pub mod domain;

/// Application layer - Client operations and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::{
    Address, DeliveryType, FailureReason, InvalidValue, Order, OrderId, OrderItem, OrderItemId,
    OrderItemStatusUpdate, OrderStatus,
};

// Application re-exports
pub use application::ports::{
    CallLogPort, CallRecord, HttpMethod, InMemoryCallLog, RequestId, RequestIdPort,
    ResponseBody, SequentialRequestIds, TracingCallLog, TransportError, TransportPort,
    UuidRequestIds,
};
pub use application::{
    Action, ListOptions, MappedResponse, OrderClient, OrderFilters, ParameterSet,
    ResponseShape, SellerCenterError, SortDirection, SortField,
};

// Infrastructure re-exports
pub use infrastructure::sellercenter::{
    ConfigError, HttpTransport, RetryConfig, SellerCenterConfig,
};
