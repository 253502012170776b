//! Integration tests for the order resource client's read path.
//!
//! These tests run against a wiremock server and verify endpoint paths,
//! query-parameter construction from filters, envelope decoding, and the
//! strict filter-family check.

use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use chrono::NaiveDate;
use shipstation_api::filters::{DateField, OrderFilter, ProductFilter};
use shipstation_api::{
    ApiKey, ResourceError, ShipStationClient, ShipStationConfig, TransportError,
};

fn test_client(server: &MockServer) -> ShipStationClient {
    let key = ApiKey::new("dGVzdDp0ZXN0").unwrap();
    let config = ShipStationConfig::with_base_url(key, server.uri()).unwrap();
    ShipStationClient::new(config)
}

fn order_fixture(order_id: u64, order_number: &str) -> serde_json::Value {
    json!({
        "orderId": order_id,
        "orderNumber": order_number,
        "orderKey": format!("key-{order_number}"),
        "orderDate": "2024-01-15T08:46:27.0000000",
        "orderStatus": "awaiting_shipment",
        "billTo": {"name": "Jane Doe", "city": "Austin", "state": "TX"},
        "shipTo": {"name": "Jane Doe", "street1": "123 Main St", "postalCode": "78701"},
        "items": [
            {
                "orderItemId": 128_836_912,
                "sku": "MUG-11OZ",
                "name": "Ceramic mug",
                "quantity": 2,
                "unitPrice": 12.50
            }
        ],
        "internalNotes": "existing",
        "advancedOptions": {"storeId": 29_559, "saturdayDelivery": false}
    })
}

// ============================================================================
// get_by_id
// ============================================================================

#[tokio::test]
async fn test_get_by_id_fetches_and_validates_single_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/123456789"))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_fixture(123_456_789, "1001")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let order = client.orders().get_by_id(123_456_789).await.unwrap();

    assert_eq!(order.order_id, Some(123_456_789));
    assert_eq!(order.order_number.as_deref(), Some("1001"));

    // Missing internationalOptions must be normalized, never absent.
    assert!(order.international_options.unwrap().customs_items.is_empty());
}

#[tokio::test]
async fn test_get_by_id_sends_basic_auth_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/1"))
        .and(wiremock::matchers::header(
            "Authorization",
            "Basic dGVzdDp0ZXN0",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(order_fixture(1, "1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.orders().get_by_id(1).await.unwrap();
}

// ============================================================================
// list / list_with_filter
// ============================================================================

#[tokio::test]
async fn test_list_decodes_orders_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [order_fixture(1, "1001"), order_fixture(2, "1002")],
            "total": 2,
            "page": 1,
            "pages": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let orders = client.orders().list().await.unwrap();

    assert_eq!(orders.len(), 2);
    assert_eq!(orders[1].order_number.as_deref(), Some("1002"));
}

#[tokio::test]
async fn test_list_with_filter_sends_accumulated_predicates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("orderStatus", "shipped"))
        .and(query_param("shipDateStart", "2024-01-01"))
        .and(query_param("shipDateEnd", "2024-01-31"))
        .and(query_param("customerName", "Jane Doe"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut filter = OrderFilter::new();
    filter.add_order_status_filter("shipped").unwrap();
    filter.add_date_filter(
        NaiveDate::from_ymd_opt(2024, 1, 1),
        NaiveDate::from_ymd_opt(2024, 1, 31),
        DateField::Ship,
    );
    filter.add_customer_name_filter("Jane Doe");

    let client = test_client(&mock_server);
    let orders = client.orders().list_with_filter(&filter).await.unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_list_with_product_filter_fails_without_network_call() {
    let mock_server = MockServer::start().await;

    // The type check fails first; the server must never be hit.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut filter = ProductFilter::new();
    filter.add_sku_filter("MUG-11OZ");

    let client = test_client(&mock_server);
    let error = client.orders().list_with_filter(&filter).await.unwrap_err();

    assert!(matches!(error, ResourceError::FilterTypeMismatch { .. }));
}

#[tokio::test]
async fn test_get_by_number_delegates_to_filtered_list() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders"))
        .and(query_param("orderNumber", "1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orders": [order_fixture(1, "1001")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let orders = client.orders().get_by_number("1001").await.unwrap();

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order_number.as_deref(), Some("1001"));
}

// ============================================================================
// tag / hold
// ============================================================================

#[tokio::test]
async fn test_tag_posts_order_and_tag_ids() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders/addtag"))
        .and(body_json(json!({"orderId": 123_456_789, "tagId": 1234})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Tag added successfully."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client.orders().tag(123_456_789, 1234).await.unwrap();
}

#[tokio::test]
async fn test_hold_posts_hold_until_date() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/orders/holduntil"))
        .and(body_json(json!({
            "orderId": 123_456_789,
            "holdUntilDate": "2024-05-01"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "The requested order has been placed on hold."
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .orders()
        .hold(123_456_789, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        .await
        .unwrap();
}

// ============================================================================
// Transport passthrough
// ============================================================================

#[tokio::test]
async fn test_non_2xx_response_passes_through_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/404"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"Message":"Order not found"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client.orders().get_by_id(404).await.unwrap_err();

    match error {
        ResourceError::Transport(TransportError::Status { code, body }) => {
            assert_eq!(code, 404);
            assert!(body.contains("Order not found"));
        }
        other => panic!("expected transport status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_order_payload_reports_all_failing_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderId": 7,
            "billTo": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client.orders().get_by_id(7).await.unwrap_err();

    let ResourceError::Validation(validation) = error else {
        panic!("expected validation error");
    };
    let fields: Vec<&str> = validation
        .violations
        .iter()
        .map(|v| v.field.as_str())
        .collect();
    assert_eq!(
        fields,
        vec!["orderNumber", "orderDate", "orderStatus", "shipTo", "items"]
    );
}
