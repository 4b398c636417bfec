//! Transport Port (Driven Port)
//!
//! Executes one named action against the seller center and hands back the
//! raw response body.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use super::request_id_port::RequestId;
use crate::application::action::Action;
use crate::application::params::ParameterSet;

/// HTTP method used for an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read-only call.
    Get,
    /// Mutating call.
    Post,
}

impl HttpMethod {
    /// Returns true if repeating the call cannot change remote state.
    #[must_use]
    pub const fn is_idempotent(&self) -> bool {
        matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// Raw XML document returned by a successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBody(String);

impl ResponseBody {
    /// Wrap a response document.
    #[must_use]
    pub fn new(xml: impl Into<String>) -> Self {
        Self(xml.into())
    }

    /// Borrow the document text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Errors from the transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Request could not be built or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The seller center answered with an `ErrorResponse`.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code from the response head.
        code: String,
        /// Error message from the response head.
        message: String,
    },

    /// Credentials were rejected.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested retry delay in seconds.
        retry_after_secs: u64,
    },

    /// Network error (retryable).
    #[error("Network error: {0}")]
    Network(String),

    /// Max retries exceeded.
    #[error("Max retries exceeded after {attempts} attempts")]
    MaxRetriesExceeded {
        /// Number of attempts made before giving up.
        attempts: u32,
    },
}

/// Port for executing seller center actions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransportPort: Send + Sync {
    /// Execute `action` with the given call parameters.
    ///
    /// `request_id` is for correlation only and is never sent as a parameter.
    async fn execute(
        &self,
        action: Action,
        request_id: &RequestId,
        params: &ParameterSet,
        method: HttpMethod,
    ) -> Result<ResponseBody, TransportError>;
}
