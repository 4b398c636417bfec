//! Application Ports (Driven)
//!
//! How the client reaches the outside world: the transport that executes
//! actions, the request id source, and the completed-call log.

mod call_log_port;
mod request_id_port;
mod transport_port;

pub use call_log_port::{CallLogPort, CallRecord, InMemoryCallLog, TracingCallLog};
pub use request_id_port::{RequestId, RequestIdPort, SequentialRequestIds, UuidRequestIds};
pub use transport_port::{HttpMethod, ResponseBody, TransportError, TransportPort};

#[cfg(test)]
pub use transport_port::MockTransportPort;
