//! Reasons an order-item status change may be rejected.

use serde::{Deserialize, Serialize};

/// A code/description pair from `GetFailureReasons`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReason {
    /// Reason type, e.g. `canceled` or `failed`.
    pub code: String,
    /// Human-readable reason.
    pub description: String,
}
