use crate::common::{header_value, test_context::{TestContext, KEY_ID, KEY_SECRET}};
use razorpay_rust::{apis::DeviceMode, client::AppDetails, RazorpayClient};
use serde_json::json;
use url::Url;
use wiremock::{
    matchers::{basic_auth, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn app_details_are_advertised_in_the_user_agent() {
    let ctx = TestContext::start().await;
    ctx.client
        .add_app_details(AppDetails::new("storefront").with_version("1.2.0"));
    ctx.client.add_app_details(AppDetails::new("reconciler"));

    Mock::given(method("GET"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.client.orders.all(None).await.unwrap();

    let requests = ctx.mock_server.received_requests().await.unwrap();
    let user_agent = header_value(&requests[0], "user-agent").unwrap();
    assert!(user_agent.starts_with("razorpay-rust/"));
    assert!(user_agent.ends_with(" storefront/1.2.0 reconciler"));
}

#[tokio::test]
async fn base_url_path_prefixes_are_preserved() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gateway/v1/orders/order_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "order_123" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = RazorpayClient::builder(KEY_ID, KEY_SECRET)
        .with_base_url(Url::parse(&format!("{}/gateway", mock_server.uri())).unwrap())
        .build()
        .unwrap();

    let order = client.orders.fetch("order_123", None).await.unwrap();
    assert_eq!(order, json!({ "id": "order_123" }));
}

#[tokio::test]
async fn device_activities_use_public_auth_and_the_device_mode_header() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/pos/device/activities"))
        .and(basic_auth(KEY_ID, ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "created" })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.client
        .device_activities
        .create(json!({ "serial_number": "SN100" }), Some(DeviceMode::Wired))
        .await
        .unwrap();

    let requests = ctx.mock_server.received_requests().await.unwrap();
    assert_eq!(
        header_value(&requests[0], "x-razorpay-device-mode").as_deref(),
        Some("wired")
    );
}
