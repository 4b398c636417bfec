//! Call Log Port (Driven Port)
//!
//! Receives one record per successfully completed call. Failures propagate
//! to the caller instead.

use std::sync::Mutex;

use super::request_id_port::RequestId;
use crate::application::action::Action;

/// Port for recording completed calls.
pub trait CallLogPort: Send + Sync {
    /// Record that `action` completed.
    fn call_completed(&self, request_id: &RequestId, action: Action, summary: &str);
}

/// Emits each completed call as a `tracing` info event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCallLog;

impl CallLogPort for TracingCallLog {
    fn call_completed(&self, request_id: &RequestId, action: Action, summary: &str) {
        tracing::info!(
            request_id = %request_id,
            action = %action,
            summary,
            "Seller center call completed"
        );
    }
}

/// A completed call as captured by [`InMemoryCallLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// Request id of the call.
    pub request_id: RequestId,
    /// Action executed.
    pub action: Action,
    /// Human-readable summary.
    pub summary: String,
}

/// Keeps records in memory, for embedding applications that inspect them.
#[derive(Debug, Default)]
pub struct InMemoryCallLog {
    records: Mutex<Vec<CallRecord>>,
}

impl InMemoryCallLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records so far.
    #[must_use]
    pub fn records(&self) -> Vec<CallRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

impl CallLogPort for InMemoryCallLog {
    fn call_completed(&self, request_id: &RequestId, action: Action, summary: &str) {
        if let Ok(mut records) = self.records.lock() {
            records.push(CallRecord {
                request_id: request_id.clone(),
                action,
                summary: summary.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_log_keeps_order() {
        let log = InMemoryCallLog::new();
        log.call_completed(&RequestId::new("a"), Action::GetOrders, "2 orders");
        log.call_completed(&RequestId::new("b"), Action::GetOrder, "1 order");

        let records = log.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].request_id.as_str(), "a");
        assert_eq!(records[0].summary, "2 orders");
        assert_eq!(records[1].action, Action::GetOrder);
    }
}
