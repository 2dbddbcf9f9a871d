use crate::common::test_context::TestContext;
use razorpay_rust::Error;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn no_content_responses_yield_an_empty_object() {
    let ctx = TestContext::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/virtual_accounts/va_Di5gbNptcWV8fQ/allowed_payers/ba_Di5gbQsGn0QSz3"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let deleted = ctx
        .client
        .virtual_accounts
        .delete_allowed_payer("va_Di5gbNptcWV8fQ", "ba_Di5gbQsGn0QSz3")
        .await
        .unwrap();

    assert_eq!(deleted, json!({}));
}

#[tokio::test]
async fn a_non_json_success_body_is_a_transport_error() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/orders/order_123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&ctx.mock_server)
        .await;

    let err = ctx.client.orders.fetch("order_123", None).await.unwrap_err();

    assert!(matches!(&err, Error::HttpError(e) if e.is_decode()));
}

#[tokio::test]
async fn path_parameters_are_percent_encoded() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/orders/order%20123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "order 123" })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let order = ctx.client.orders.fetch("order 123", None).await.unwrap();

    assert_eq!(order["id"], "order 123");
}
