use crate::common::test_context::TestContext;
use razorpay_rust::{error::ApiError, Error};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

/// A response slower than the 100ms client timeout of
/// `TestContext::start_with_fast_timeout`, standing in for a transient
/// transport failure.
fn stalled() -> ResponseTemplate {
    ResponseTemplate::new(200).set_delay(Duration::from_millis(500))
}

#[tokio::test]
async fn transient_timeouts_are_retried_until_success() {
    let ctx = TestContext::start_with_fast_timeout().await;
    ctx.client.enable_retry(true);

    Mock::given(method("GET"))
        .and(path("/v1/orders/order_123"))
        .respond_with(stalled())
        .up_to_n_times(2)
        .mount(&ctx.mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/orders/order_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .mount(&ctx.mock_server)
        .await;

    let order = ctx.client.orders.fetch("order_123", None).await.unwrap();

    assert_eq!(order, json!({ "ok": true }));
    assert_eq!(ctx.mock_server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn retrying_is_disabled_by_default() {
    let ctx = TestContext::start_with_fast_timeout().await;

    Mock::given(method("GET"))
        .and(path("/v1/orders/order_123"))
        .respond_with(stalled())
        .mount(&ctx.mock_server)
        .await;

    let err = ctx.client.orders.fetch("order_123", None).await.unwrap_err();

    assert!(matches!(&err, Error::HttpError(e) if e.is_timeout()));
    assert_eq!(ctx.mock_server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn exhausted_retries_surface_the_transport_error() {
    let ctx = TestContext::start_with_fast_timeout().await;
    ctx.client.enable_retry(true);

    Mock::given(method("GET"))
        .and(path("/v1/orders/order_123"))
        .respond_with(stalled())
        .mount(&ctx.mock_server)
        .await;

    let err = ctx.client.orders.fetch("order_123", None).await.unwrap_err();

    assert!(matches!(&err, Error::HttpError(e) if e.is_timeout()));
    // The test context allows 5 attempts in total.
    assert_eq!(ctx.mock_server.received_requests().await.unwrap().len(), 5);
}

#[tokio::test]
async fn http_errors_are_not_retried() {
    let ctx = TestContext::start().await;
    ctx.client.enable_retry(true);

    Mock::given(method("GET"))
        .and(path("/v1/orders/order_123"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": { "code": "SERVER_ERROR", "description": "boom" }
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let err = ctx.client.orders.fetch("order_123", None).await.unwrap_err();

    assert!(matches!(err, Error::ApiError(ApiError::Server(_))));
}

#[tokio::test]
async fn retrying_can_be_toggled_back_off() {
    let ctx = TestContext::start_with_fast_timeout().await;
    ctx.client.enable_retry(true);
    ctx.client.enable_retry(false);

    Mock::given(method("GET"))
        .and(path("/v1/orders/order_123"))
        .respond_with(stalled())
        .mount(&ctx.mock_server)
        .await;

    let err = ctx.client.orders.fetch("order_123", None).await.unwrap_err();

    assert!(matches!(&err, Error::HttpError(e) if e.is_timeout()));
    assert_eq!(ctx.mock_server.received_requests().await.unwrap().len(), 1);
}
