//! Seller Center Binary
//!
//! Fetches the failure reasons and the recently updated orders of one seller
//! account and prints them as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin seller-center
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `SELLER_CENTER_ENDPOINT`: API endpoint URL
//! - `SELLER_CENTER_USER_ID`: Seller account user id
//! - `SELLER_CENTER_API_KEY`: API key used to sign requests
//!
//! ## Optional
//! - `SELLER_CENTER_API_VERSION`: API version (default: 1.0)
//! - `SELLER_CENTER_TIMEOUT_SECS`: HTTP timeout (default: 30)
//! - `SELLER_CENTER_MAX_ATTEMPTS`: Attempts per read-only call (default: 3)
//! - `SELLER_CENTER_LOOKBACK_HOURS`: Window for updated orders (default: 24)
//! - `RUST_LOG`: Log filter (default: seller_center_sdk=info)

use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use seller_center_sdk::infrastructure::telemetry;
use seller_center_sdk::{HttpTransport, ListOptions, OrderClient, SellerCenterConfig};

/// Lookback window when `SELLER_CENTER_LOOKBACK_HOURS` is unset.
const DEFAULT_LOOKBACK_HOURS: i64 = 24;

/// Longest accepted lookback window, one year.
const MAX_LOOKBACK_HOURS: i64 = 24 * 365;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    telemetry::init().context("failed to initialize tracing")?;

    let config = SellerCenterConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        endpoint = %config.endpoint,
        user_id = %config.user_id,
        version = %config.version,
        timeout_secs = config.timeout.as_secs(),
        max_attempts = config.retry.max_attempts,
        "Configuration loaded"
    );

    let transport = HttpTransport::new(&config).context("failed to build HTTP transport")?;
    let client = OrderClient::new(Arc::new(transport));

    let failure_reasons = client
        .get_failure_reasons()
        .await
        .context("GetFailureReasons failed")?;

    let lookback_hours = std::env::var("SELLER_CENTER_LOOKBACK_HOURS")
        .ok()
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|h| (1..=MAX_LOOKBACK_HOURS).contains(h))
        .unwrap_or(DEFAULT_LOOKBACK_HOURS);
    let since = (Utc::now() - chrono::Duration::hours(lookback_hours)).naive_utc();

    let orders = client
        .get_orders_updated_after(since, &ListOptions::default())
        .await
        .context("GetOrders failed")?;

    let report = serde_json::json!({
        "failure_reasons": failure_reasons,
        "updated_since": since,
        "orders": orders,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
