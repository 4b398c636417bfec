//! HTTP transport with request signing and retry logic.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use rand::Rng;
use reqwest::{Client, StatusCode, Url};

use super::config::{Credentials, RetryConfig, SellerCenterConfig};
use super::signing;
use crate::application::action::Action;
use crate::application::params::ParameterSet;
use crate::application::ports::{
    HttpMethod, RequestId, ResponseBody, TransportError, TransportPort,
};

/// Response format requested from the API.
const RESPONSE_FORMAT: &str = "XML";

/// Fraction of a backoff delay added as random jitter.
const JITTER_FACTOR: f64 = 0.1;

/// Seller center transport over HTTP.
///
/// Merges the base parameters beneath the call parameters, signs the result
/// and sends it as the query string. Read-only actions are retried per the
/// configured [`RetryConfig`]; mutating actions are sent once.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: Url,
    user_id: String,
    credentials: Credentials,
    version: String,
    retry_config: RetryConfig,
}

impl HttpTransport {
    /// Create a new transport from config.
    pub fn new(config: &SellerCenterConfig) -> Result<Self, TransportError> {
        if config.credentials.api_key().is_empty() {
            return Err(TransportError::AuthenticationFailed);
        }

        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| TransportError::Http(format!("invalid endpoint: {e}")))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            user_id: config.user_id.clone(),
            credentials: config.credentials.clone(),
            version: config.version.clone(),
            retry_config: config.retry.clone(),
        })
    }

    /// Parameters sent with every call.
    fn base_params(&self, action: Action, timestamp: &str) -> ParameterSet {
        ParameterSet::new()
            .with("Action", action.as_str())
            .with("Format", RESPONSE_FORMAT)
            .with("Timestamp", timestamp)
            .with("UserID", self.user_id.as_str())
            .with("Version", self.version.as_str())
    }

    /// Signed request URL. Call parameters win over base parameters.
    fn request_url(&self, action: Action, params: &ParameterSet) -> Result<Url, TransportError> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false);
        let merged = self.base_params(action, &timestamp).merged(params);
        let query = signing::signed_query(&merged, self.credentials.api_key())?;

        let mut url = self.endpoint.clone();
        url.set_query(Some(&query));
        Ok(url)
    }
}

#[async_trait]
impl TransportPort for HttpTransport {
    async fn execute(
        &self,
        action: Action,
        request_id: &RequestId,
        params: &ParameterSet,
        method: HttpMethod,
    ) -> Result<ResponseBody, TransportError> {
        let retryable = method.is_idempotent();
        let mut backoff = ExponentialBackoff::new(&self.retry_config);

        loop {
            let url = self.request_url(action, params)?;
            tracing::debug!(
                request_id = %request_id,
                action = %action,
                method = %method,
                "Dispatching seller center request"
            );

            let request = match method {
                HttpMethod::Get => self.client.get(url),
                HttpMethod::Post => self.client.post(url),
            };

            let response = match request.send().await {
                Ok(resp) => resp,
                Err(e) => {
                    if !retryable {
                        return Err(TransportError::Network(e.to_string()));
                    }
                    if let Some(delay) = backoff.next_backoff() {
                        tracing::warn!(
                            request_id = %request_id,
                            error = %e,
                            delay_ms = delay.as_millis(),
                            attempt = backoff.attempt,
                            "Network error, retrying"
                        );
                        tokio::time::sleep(with_jitter(delay)).await;
                        continue;
                    }
                    return Err(TransportError::MaxRetriesExceeded {
                        attempts: backoff.attempt,
                    });
                }
            };

            let status = response.status();
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());

            let text = response
                .text()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;

            // The API reports most failures as an ErrorResponse with status 200.
            if status.is_success() {
                return match error_response(&text) {
                    Some((code, message)) => Err(TransportError::Api { code, message }),
                    None => Ok(ResponseBody::new(text)),
                };
            }

            let (error_code, error_message) = error_response(&text)
                .unwrap_or_else(|| (status.as_u16().to_string(), text.clone()));

            match categorize_status(status) {
                ErrorCategory::RateLimited => {
                    let delay = if retryable {
                        backoff
                            .next_backoff()
                            .map(|d| retry_after.map_or(d, Duration::from_secs))
                    } else {
                        None
                    };
                    if let Some(delay) = delay {
                        tracing::warn!(
                            request_id = %request_id,
                            code = %error_code,
                            delay_ms = delay.as_millis(),
                            "Rate limited, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(TransportError::RateLimited {
                        retry_after_secs: retry_after.unwrap_or(60),
                    });
                }
                ErrorCategory::Retryable => {
                    if !retryable {
                        return Err(TransportError::Api {
                            code: error_code,
                            message: error_message,
                        });
                    }
                    if let Some(delay) = backoff.next_backoff() {
                        tracing::warn!(
                            request_id = %request_id,
                            code = %error_code,
                            message = %error_message,
                            delay_ms = delay.as_millis(),
                            "Retryable error, retrying"
                        );
                        tokio::time::sleep(with_jitter(delay)).await;
                        continue;
                    }
                    return Err(TransportError::MaxRetriesExceeded {
                        attempts: backoff.attempt,
                    });
                }
                ErrorCategory::NonRetryable => {
                    return match status {
                        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                            Err(TransportError::AuthenticationFailed)
                        }
                        _ => Err(TransportError::Api {
                            code: error_code,
                            message: error_message,
                        }),
                    };
                }
            }
        }
    }
}

/// Code and message of an `ErrorResponse` document, if `text` is one.
fn error_response(text: &str) -> Option<(String, String)> {
    let doc = roxmltree::Document::parse(text).ok()?;
    let root = doc.root_element();
    if !root.has_tag_name("ErrorResponse") {
        return None;
    }

    let head = root.children().find(|n| n.has_tag_name("Head"));
    let field = |name: &str| {
        head.and_then(|h| h.children().find(|n| n.has_tag_name(name)))
            .and_then(|n| n.text())
            .unwrap_or_default()
            .trim()
            .to_string()
    };

    Some((field("ErrorCode"), field("ErrorMessage")))
}

/// Error category for determining retry behavior.
enum ErrorCategory {
    RateLimited,
    Retryable,
    NonRetryable,
}

/// Categorize HTTP status code for retry handling.
const fn categorize_status(status: StatusCode) -> ErrorCategory {
    match status.as_u16() {
        429 => ErrorCategory::RateLimited,
        408 | 500 | 502 | 503 | 504 => ErrorCategory::Retryable,
        _ => ErrorCategory::NonRetryable,
    }
}

/// Stretch `delay` by up to [`JITTER_FACTOR`].
fn with_jitter(delay: Duration) -> Duration {
    let factor = rand::rng().random_range(0.0..=JITTER_FACTOR);
    delay + delay.mul_f64(factor)
}

/// Exponential backoff calculator.
struct ExponentialBackoff {
    attempt: u32,
    max_attempts: u32,
    current_backoff: Duration,
    max_backoff: Duration,
    multiplier: f64,
}

impl ExponentialBackoff {
    const fn new(config: &RetryConfig) -> Self {
        Self {
            attempt: 0,
            max_attempts: config.max_attempts,
            current_backoff: config.initial_backoff,
            max_backoff: config.max_backoff,
            multiplier: config.multiplier,
        }
    }

    fn next_backoff(&mut self) -> Option<Duration> {
        self.attempt += 1;
        if self.attempt >= self.max_attempts {
            return None;
        }

        let backoff = self.current_backoff;
        self.current_backoff = Duration::from_secs_f64(
            (self.current_backoff.as_secs_f64() * self.multiplier)
                .min(self.max_backoff.as_secs_f64()),
        );

        Some(backoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport() -> HttpTransport {
        let config = SellerCenterConfig::new(
            "https://sellercenter.example.com/".to_string(),
            "seller@example.com".to_string(),
            "secret-key".to_string(),
        );
        HttpTransport::new(&config).unwrap()
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let config = SellerCenterConfig::new(
            "https://sellercenter.example.com/".to_string(),
            "seller@example.com".to_string(),
            String::new(),
        );
        assert!(matches!(
            HttpTransport::new(&config),
            Err(TransportError::AuthenticationFailed)
        ));
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let config = SellerCenterConfig::new(
            "not a url".to_string(),
            "seller@example.com".to_string(),
            "secret-key".to_string(),
        );
        assert!(matches!(
            HttpTransport::new(&config),
            Err(TransportError::Http(_))
        ));
    }

    #[test]
    fn base_params_carry_identity() {
        let params = transport().base_params(Action::GetOrders, "2024-01-15T10:30:00+00:00");
        let keys: Vec<&str> = params.keys().collect();
        assert_eq!(keys, ["Action", "Format", "Timestamp", "UserID", "Version"]);
        assert_eq!(params.get_str("Action").as_deref(), Some("GetOrders"));
        assert_eq!(params.get_str("Format").as_deref(), Some("XML"));
        assert_eq!(params.get_str("Version").as_deref(), Some("1.0"));
    }

    #[test]
    fn request_url_is_signed_last() {
        let params = ParameterSet::new().with("OrderId", 42_u64);
        let url = transport().request_url(Action::GetOrder, &params).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            [
                "Action",
                "Format",
                "OrderId",
                "Timestamp",
                "UserID",
                "Version",
                "Signature"
            ]
        );
        let timestamp = &pairs[3].1;
        assert!(timestamp.ends_with("+00:00"), "timestamp {timestamp}");
        assert_eq!(pairs[6].1.len(), 64);
        assert_eq!(url.host_str(), Some("sellercenter.example.com"));
    }

    #[test]
    fn call_params_override_base_params() {
        let params = ParameterSet::new().with("Version", "2.0");
        let url = transport().request_url(Action::GetOrders, &params).unwrap();
        let version = url
            .query_pairs()
            .find(|(k, _)| k == "Version")
            .map(|(_, v)| v.into_owned());
        assert_eq!(version.as_deref(), Some("2.0"));
    }

    #[test]
    fn error_response_is_detected() {
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <ErrorResponse><Head><RequestAction>GetOrder</RequestAction>\
            <ErrorType>Sender</ErrorType><ErrorCode>16</ErrorCode>\
            <ErrorMessage>E016: \"abc\" Invalid Order ID</ErrorMessage></Head>\
            <Body/></ErrorResponse>";
        assert_eq!(
            error_response(body),
            Some(("16".to_string(), "E016: \"abc\" Invalid Order ID".to_string()))
        );
    }

    #[test]
    fn success_response_is_not_an_error() {
        let body = "<SuccessResponse><Head/><Body><Orders/></Body></SuccessResponse>";
        assert_eq!(error_response(body), None);
        assert_eq!(error_response("not xml"), None);
    }

    #[test]
    fn categorize_rate_limited() {
        assert!(matches!(
            categorize_status(StatusCode::TOO_MANY_REQUESTS),
            ErrorCategory::RateLimited
        ));
    }

    #[test]
    fn categorize_retryable() {
        for status in [
            StatusCode::REQUEST_TIMEOUT,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            assert!(matches!(categorize_status(status), ErrorCategory::Retryable));
        }
    }

    #[test]
    fn categorize_non_retryable() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::UNAUTHORIZED,
        ] {
            assert!(matches!(
                categorize_status(status),
                ErrorCategory::NonRetryable
            ));
        }
    }

    #[test]
    fn jitter_stays_within_bounds() {
        let delay = Duration::from_millis(100);
        for _ in 0..100 {
            let jittered = with_jitter(delay);
            assert!(jittered >= delay);
            assert!(jittered <= Duration::from_millis(110));
        }
    }

    #[test]
    fn exponential_backoff_increments() {
        let config = RetryConfig {
            max_attempts: 4,
            initial_backoff: Duration::from_millis(100),
            max_backoff: Duration::from_secs(10),
            multiplier: 2.0,
        };

        let mut backoff = ExponentialBackoff::new(&config);

        assert_eq!(backoff.next_backoff(), Some(Duration::from_millis(100)));
        assert_eq!(backoff.next_backoff(), Some(Duration::from_millis(200)));
        assert_eq!(backoff.next_backoff(), Some(Duration::from_millis(400)));
        // attempt 4 >= max_attempts 4
        assert_eq!(backoff.next_backoff(), None);
    }

    #[test]
    fn exponential_backoff_respects_max() {
        let config = RetryConfig {
            max_attempts: 10,
            initial_backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(5),
            multiplier: 10.0,
        };

        let mut backoff = ExponentialBackoff::new(&config);

        backoff.next_backoff();
        assert_eq!(backoff.next_backoff(), Some(Duration::from_secs(5)));
    }
}
