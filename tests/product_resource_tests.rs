//! Integration tests for the product resource client.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shipstation_api::filters::OrderFilter;
use shipstation_api::{ApiKey, ResourceError, ShipStationClient, ShipStationConfig};

fn test_client(server: &MockServer) -> ShipStationClient {
    let key = ApiKey::new("dGVzdDp0ZXN0").unwrap();
    let config = ShipStationConfig::with_base_url(key, server.uri()).unwrap();
    ShipStationClient::new(config)
}

fn product_fixture(product_id: u64, sku: &str) -> serde_json::Value {
    json!({
        "productId": product_id,
        "sku": sku,
        "name": "Ceramic mug",
        "price": 12.5,
        "weightOz": 14.0,
        "active": true,
        "tags": [{"tagId": 99, "name": "Old tag"}]
    })
}

#[tokio::test]
async fn test_list_decodes_products_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [product_fixture(1, "MUG-11OZ"), product_fixture(2, "MUG-15OZ")],
            "total": 2
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let products = client.products().list().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[1].sku.as_deref(), Some("MUG-15OZ"));
}

#[tokio::test]
async fn test_get_by_sku_sends_sku_query_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("sku", "MUG-11OZ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [product_fixture(7_654_321, "MUG-11OZ")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let product = client.products().get_by_sku("MUG-11OZ").await.unwrap();

    assert_eq!(product.product_id, Some(7_654_321));
}

#[tokio::test]
async fn test_get_by_sku_reports_missing_product() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client.products().get_by_sku("GONE").await.unwrap_err();

    assert!(matches!(
        error,
        ResourceError::ProductNotFound { sku } if sku == "GONE"
    ));
}

#[tokio::test]
async fn test_list_with_order_filter_fails_without_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut filter = OrderFilter::new();
    filter.add_order_number("1001");

    let client = test_client(&mock_server);
    let error = client
        .products()
        .list_with_filter(&filter)
        .await
        .unwrap_err();

    assert!(matches!(error, ResourceError::FilterTypeMismatch { .. }));
}

#[tokio::test]
async fn test_update_tags_resends_full_product_with_replaced_tags() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("sku", "MUG-11OZ"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [product_fixture(7_654_321, "MUG-11OZ")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/products/7654321"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "The requested product has been updated"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .products()
        .update_tags("MUG-11OZ", &[1234, 5678])
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let update = requests
        .iter()
        .find(|r| r.url.path() == "/products/7654321")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&update.body).unwrap();

    // Tags are replaced with exactly the supplied ids, the rest of the
    // record is resent, and the read-only id stays out of the body.
    assert_eq!(body["tags"], json!([{"tagId": 1234}, {"tagId": 5678}]));
    assert_eq!(body["sku"], "MUG-11OZ");
    assert_eq!(body["name"], "Ceramic mug");
    assert!(body.get("productId").is_none());
}

#[tokio::test]
async fn test_update_tags_requires_product_id_on_fetched_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{"sku": "MUG-11OZ", "name": "Ceramic mug"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client
        .products()
        .update_tags("MUG-11OZ", &[1234])
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ResourceError::MissingPrecondition {
            field: "productId",
            ..
        }
    ));
}
