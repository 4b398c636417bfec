//! Application Layer
//!
//! Orchestrates calls to the seller center. It defines:
//!
//! - **Ports**: Interfaces for the transport, request ids and call logging
//! - **Params**: The parameter builder for call arguments
//! - **Mapper**: XML response bodies to domain records
//! - **Order Client**: The high-level operations

pub mod action;
pub mod error;
pub mod mapper;
pub mod order_client;
pub mod params;
pub mod ports;

pub use action::Action;
pub use error::SellerCenterError;
pub use mapper::{MappedResponse, ResponseShape};
pub use order_client::OrderClient;
pub use params::{
    DateFacet, ListOptions, OrderFilters, ParamValue, ParameterSet, SortDirection, SortField,
};
pub use ports::*;
