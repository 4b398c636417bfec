//! Request Id Port (Driven Port)
//!
//! Every call gets a token used to correlate transport and log records.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Correlation token for one call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Create a request id from a string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Port for generating request ids.
pub trait RequestIdPort: Send + Sync {
    /// Produce an id not handed out before.
    fn next_id(&self) -> RequestId;
}

/// Random ids (UUID v4).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestIds;

impl RequestIdPort for UuidRequestIds {
    fn next_id(&self) -> RequestId {
        RequestId(uuid::Uuid::new_v4().to_string())
    }
}

/// Monotonic ids with a fixed prefix, e.g. `req-1`, `req-2`.
#[derive(Debug)]
pub struct SequentialRequestIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialRequestIds {
    /// Start a sequence at 1.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl RequestIdPort for SequentialRequestIds {
    fn next_id(&self) -> RequestId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        RequestId(format!("{}-{n}", self.prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_ids_are_unique() {
        let ids = UuidRequestIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }

    #[test]
    fn sequential_ids_increase() {
        let ids = SequentialRequestIds::new("req");
        assert_eq!(ids.next_id().as_str(), "req-1");
        assert_eq!(ids.next_id().as_str(), "req-2");
        assert_eq!(ids.next_id().to_string(), "req-3");
    }
}
