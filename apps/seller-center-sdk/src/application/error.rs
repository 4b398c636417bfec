//! Errors surfaced by the high-level client operations.

use thiserror::Error;

use super::ports::TransportError;
use crate::domain::InvalidValue;

/// Errors from the seller center client.
#[derive(Debug, Error, Clone)]
pub enum SellerCenterError {
    /// A collection argument that must be non-empty was empty.
    ///
    /// Raised before anything is sent.
    #[error("{argument} must not be empty")]
    EmptyArgument {
        /// Name of the offending argument.
        argument: &'static str,
    },

    /// A value outside a fixed enumeration on a strictly validated path.
    #[error(transparent)]
    InvalidDomain(#[from] InvalidValue),

    /// The response lacked a required node or held an unreadable value.
    #[error("Unexpected response: {0}")]
    Mapping(String),

    /// Propagated unchanged from the transport.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SellerCenterError {
    pub(crate) fn mapping(message: impl Into<String>) -> Self {
        Self::Mapping(message.into())
    }
}
