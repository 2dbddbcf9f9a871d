use crate::common::test_context::TestContext;
use razorpay_rust::{error::ApiError, Error};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn bad_request_bodies_map_to_bad_request_errors() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": "BAD_REQUEST_ERROR",
                "description": "The amount must be at least INR 1.00",
                "field": "amount"
            }
        })))
        .mount(&ctx.mock_server)
        .await;

    let err = ctx
        .client
        .orders
        .create(json!({ "amount": 0, "currency": "INR" }))
        .await
        .unwrap_err();

    match err {
        Error::ApiError(ApiError::BadRequest(description)) => {
            assert_eq!(description, "The amount must be at least INR 1.00")
        }
        e => panic!("unexpected error: {}", e),
    }
}

#[tokio::test]
async fn gateway_failures_map_to_gateway_errors() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/pay_29QQoUBi66xm2f/capture"))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({
            "error": {
                "code": "GATEWAY_ERROR",
                "description": "The gateway request timed out"
            }
        })))
        .mount(&ctx.mock_server)
        .await;

    let err = ctx
        .client
        .payments
        .capture("pay_29QQoUBi66xm2f", 50000, None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::ApiError(ApiError::Gateway(description)) if description == "The gateway request timed out"
    ));
}

#[tokio::test]
async fn html_error_pages_map_to_server_errors() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/settlements"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_string("<html><body>502 Bad Gateway</body></html>"),
        )
        .mount(&ctx.mock_server)
        .await;

    let err = ctx.client.settlements.all(None).await.unwrap_err();

    match err {
        Error::ApiError(ApiError::Server(description)) => {
            assert!(description.contains("non-JSON response"));
            assert!(description.contains("502 Bad Gateway"));
        }
        e => panic!("unexpected error: {}", e),
    }
}
