//! HTTP Integration Tests
//!
//! Drives `OrderClient` over the real `HttpTransport` against a mock seller
//! center serving XML fixtures.

#![allow(clippy::unwrap_used)]

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use wiremock::matchers::{method, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use seller_center_sdk::infrastructure::sellercenter::signing;
use seller_center_sdk::{
    DeliveryType, HttpTransport, InMemoryCallLog, ListOptions, OrderClient, OrderId, OrderItemId,
    OrderStatus, ParameterSet, RetryConfig, SellerCenterConfig, SellerCenterError,
    SequentialRequestIds, TransportError,
};

const API_KEY: &str = "test-api-key";

type TestClient = OrderClient<HttpTransport, SequentialRequestIds, InMemoryCallLog>;

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(path).unwrap()
}

fn xml(name: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "application/xml")
        .set_body_string(fixture(name))
}

fn config(server: &MockServer) -> SellerCenterConfig {
    SellerCenterConfig::new(
        format!("{}/", server.uri()),
        "seller@example.com".to_string(),
        API_KEY.to_string(),
    )
    .with_timeout(Duration::from_secs(5))
    .with_retry(RetryConfig {
        max_attempts: 3,
        initial_backoff: Duration::from_millis(1),
        max_backoff: Duration::from_millis(5),
        multiplier: 2.0,
    })
}

fn client(config: &SellerCenterConfig) -> (TestClient, Arc<InMemoryCallLog>) {
    let log = Arc::new(InMemoryCallLog::new());
    let client = OrderClient::with_ports(
        Arc::new(HttpTransport::new(config).unwrap()),
        Arc::new(SequentialRequestIds::new("it")),
        Arc::clone(&log),
    );
    (client, log)
}

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

// =============================================================================
// Reads
// =============================================================================

#[tokio::test]
async fn get_orders_created_between_maps_fixture() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetOrders"))
        .and(query_param("Format", "XML"))
        .and(query_param("UserID", "seller@example.com"))
        .and(query_param("Version", "1.0"))
        .and(query_param("CreatedAfter", "2024-01-01T00:00:00"))
        .and(query_param("CreatedBefore", "2024-01-31T23:59:59"))
        .and(query_param("Limit", "1000"))
        .and(query_param("Offset", "0"))
        .and(query_param("SortBy", "created_at"))
        .and(query_param("SortDirection", "ASC"))
        .respond_with(xml("get_orders.xml"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, log) = client(&config(&server));
    let orders = client
        .get_orders_created_between(
            ts("2024-01-01T00:00:00"),
            ts("2024-01-31T23:59:59"),
            &ListOptions::default(),
        )
        .await
        .unwrap();

    assert_eq!(orders.len(), 2);

    let first = &orders[0];
    assert_eq!(first.order_id, OrderId::new(5001));
    assert_eq!(first.order_number, "300001234");
    assert_eq!(first.price, Some(Decimal::from_str("1299.00").unwrap()));
    assert_eq!(first.gift_option, Some(false));
    assert_eq!(first.remarks.as_deref(), Some(""));
    assert_eq!(first.items_count, Some(2));
    assert_eq!(first.statuses, vec![OrderStatus::Pending]);
    assert_eq!(first.created_at, ts("2024-01-10T08:00:00"));
    let shipping = first.address_shipping.as_ref().unwrap();
    assert_eq!(shipping.address1.as_deref(), Some("12 Mabini St"));
    assert_eq!(shipping.address2.as_deref(), Some("Unit 4"));
    let billing = first.address_billing.as_ref().unwrap();
    assert_eq!(billing.address2, None);

    let second = &orders[1];
    assert_eq!(second.gift_message.as_deref(), Some("Happy birthday"));
    assert_eq!(second.remarks, None);
    assert!(second.address_billing.is_none());
    assert!(second.has_status(OrderStatus::Shipped));

    let records = log.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].request_id.as_str(), "it-1");
    assert_eq!(records[0].summary, "2 orders");
}

#[tokio::test]
async fn request_signature_verifies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetFailureReasons"))
        .respond_with(xml("get_failure_reasons.xml"))
        .mount(&server)
        .await;

    let (client, _) = client(&config(&server));
    client.get_failure_reasons().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let mut unsigned = ParameterSet::new();
    let mut signature = None;
    for (key, value) in requests[0].url.query_pairs() {
        if key == signing::SIGNATURE_KEY {
            signature = Some(value.into_owned());
        } else {
            unsigned.insert(key.into_owned(), value.into_owned());
        }
    }

    let expected = signing::sign(API_KEY, &signing::canonical_query(&unsigned)).unwrap();
    assert_eq!(signature, Some(expected));
    assert!(unsigned.get_str("Timestamp").unwrap().ends_with("+00:00"));
}

#[tokio::test]
async fn get_order_items_keeps_empty_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetOrderItems"))
        .and(query_param("OrderId", "5001"))
        .respond_with(xml("get_order_items.xml"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&config(&server));
    let items = client.get_order_items(OrderId::new(5001)).await.unwrap();

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|i| i.order_id == OrderId::new(5001)));
    assert_eq!(items[0].order_item_id, OrderItemId::new(9001));
    assert_eq!(items[0].tracking_code.as_deref(), Some(""));
    assert_eq!(items[0].is_digital, Some(false));
    assert_eq!(items[1].tracking_code, None);
    assert_eq!(
        items[1].voucher_amount,
        Some(Decimal::from_str("49.50").unwrap())
    );
}

#[tokio::test]
async fn get_multiple_order_items_flattens_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetMultipleOrderItems"))
        .and(query_param("OrderIdList", "[5001,5002]"))
        .respond_with(xml("get_multiple_order_items.xml"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, log) = client(&config(&server));
    let items = client
        .get_multiple_order_items(&[OrderId::new(5001), OrderId::new(5002)])
        .await
        .unwrap();

    let pairs: Vec<(u64, u64)> = items
        .iter()
        .map(|i| (i.order_id.value(), i.order_item_id.value()))
        .collect();
    assert_eq!(pairs, vec![(5001, 9001), (5001, 9002), (5002, 9003)]);
    assert_eq!(log.records()[0].summary, "3 order items");
}

// =============================================================================
// Status changes
// =============================================================================

#[tokio::test]
async fn ready_to_ship_is_posted_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(query_param("Action", "SetStatusToReadyToShip"))
        .and(query_param("OrderItemIds", "[9001]"))
        .and(query_param("DeliveryType", "dropship"))
        .and(query_param("ShippingProvider", "LBC"))
        .and(query_param_is_missing("TrackingNumber"))
        .respond_with(xml("set_status_to_ready_to_ship.xml"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&config(&server));
    let updates = client
        .set_status_to_ready_to_ship(
            &[OrderItemId::new(9001)],
            DeliveryType::Dropship,
            Some("LBC"),
            None,
        )
        .await
        .unwrap();

    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].order_item_id, Some(OrderItemId::new(9001)));
    assert_eq!(updates[0].purchase_order_number.as_deref(), Some("ABC-123456"));
    assert_eq!(updates[0].package_id.as_deref(), Some("PKG-1"));
}

#[tokio::test]
async fn post_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, log) = client(&config(&server));
    let err = client
        .set_status_to_canceled(OrderItemId::new(9001), "Out of stock", Some("supplier"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SellerCenterError::Transport(TransportError::Api { ref code, .. }) if code == "503"
    ));
    assert!(log.records().is_empty());
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn error_response_becomes_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("Action", "GetOrder"))
        .respond_with(xml("error_invalid_order.xml"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, log) = client(&config(&server));
    let err = client.get_order(OrderId::new(1)).await.unwrap_err();

    match err {
        SellerCenterError::Transport(TransportError::Api { code, message }) => {
            assert_eq!(code, "16");
            assert_eq!(message, "E016: Invalid Order ID");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(log.records().is_empty());
}

#[tokio::test]
async fn unauthorized_is_authentication_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&config(&server));
    let err = client.get_failure_reasons().await.unwrap_err();

    assert!(matches!(
        err,
        SellerCenterError::Transport(TransportError::AuthenticationFailed)
    ));
}

#[tokio::test]
async fn get_is_retried_until_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&server)
        .await;

    let (client, _) = client(&config(&server));
    let err = client.get_failure_reasons().await.unwrap_err();

    assert!(matches!(
        err,
        SellerCenterError::Transport(TransportError::MaxRetriesExceeded { attempts: 3 })
    ));
}

#[tokio::test]
async fn get_recovers_after_transient_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(xml("get_failure_reasons.xml"))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _) = client(&config(&server));
    let reasons = client.get_failure_reasons().await.unwrap();

    assert_eq!(reasons.len(), 3);
    assert_eq!(reasons[0].code, "canceled");
    assert_eq!(reasons[2].description, "Customer unreachable");
}

#[tokio::test]
async fn empty_id_list_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _) = client(&config(&server));
    let err = client
        .set_status_to_packed_by_marketplace(&[], DeliveryType::Pickup, None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SellerCenterError::EmptyArgument {
            argument: "OrderItemIds"
        }
    ));
}

#[tokio::test]
async fn unknown_status_is_rejected_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (client, _) = client(&config(&server));
    let err = client
        .get_orders_with_status("lost", &ListOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, SellerCenterError::InvalidDomain(_)));
}
