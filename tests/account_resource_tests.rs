//! Integration tests for the customer, tag, and shipment clients.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shipstation_api::resources::CustomerListParams;
use shipstation_api::{ApiKey, ResourceError, ShipStationClient, ShipStationConfig};

fn test_client(server: &MockServer) -> ShipStationClient {
    let key = ApiKey::new("dGVzdDp0ZXN0").unwrap();
    let config = ShipStationConfig::with_base_url(key, server.uri()).unwrap();
    ShipStationClient::new(config)
}

// ============================================================================
// Customers
// ============================================================================

#[tokio::test]
async fn test_customers_list_sends_only_set_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("stateCode", "TX"))
        .and(query_param("sortBy", "Name"))
        .and(query_param("pageSize", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customers": [
                {"customerId": 1, "name": "Jane Doe", "email": "jane@example.com"}
            ],
            "total": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let params = CustomerListParams {
        state_code: Some("TX".to_string()),
        sort_by: Some("Name".to_string()),
        page_size: Some(100),
        ..Default::default()
    };

    let client = test_client(&mock_server);
    let customers = client.customers().list(Some(params)).await.unwrap();

    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].email.as_deref(), Some("jane@example.com"));
}

#[tokio::test]
async fn test_customers_get_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/37701499"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customerId": 37_701_499,
            "name": "Jane Doe",
            "countryCode": "US",
            "marketplaceUsernames": [
                {"customerUserId": 1, "marketplace": "Shopify", "username": "jane"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let customer = client.customers().get_by_id(37_701_499).await.unwrap();

    assert_eq!(customer.customer_id, Some(37_701_499));
    assert_eq!(
        customer.marketplace_usernames.unwrap()[0].username.as_deref(),
        Some("jane")
    );
}

// ============================================================================
// Tags
// ============================================================================

#[tokio::test]
async fn test_tags_list_decodes_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/listtags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"tagId": 1234, "name": "Urgent", "color": "#FF0000"},
            {"tagId": 5678, "name": "Gift", "color": "#00FF00"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let tags = client.tags().list().await.unwrap();

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].name.as_deref(), Some("Urgent"));
    assert_eq!(tags[1].tag_id, Some(5678));
}

#[tokio::test]
async fn test_tags_list_rejects_non_array_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/accounts/listtags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client.tags().list().await.unwrap_err();

    assert!(matches!(error, ResourceError::UnexpectedResponse { .. }));
}

// ============================================================================
// Shipments
// ============================================================================

#[tokio::test]
async fn test_shipments_list_decodes_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/shipments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shipments": [
                {
                    "shipmentId": 33_974_374,
                    "orderId": 123_456_789,
                    "orderNumber": "1001",
                    "trackingNumber": "9400111899561704681189",
                    "shipmentCost": 4.25,
                    "voided": false
                }
            ],
            "total": 1
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let shipments = client.shipments().list().await.unwrap();

    assert_eq!(shipments.len(), 1);
    assert_eq!(shipments[0].shipment_id, Some(33_974_374));
    assert_eq!(
        shipments[0].tracking_number.as_deref(),
        Some("9400111899561704681189")
    );
}
