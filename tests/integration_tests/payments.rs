use crate::common::test_context::TestContext;
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn capture_payment_merges_the_amount_into_the_body() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/pay_29QQoUBi66xm2f/capture"))
        .and(body_json(json!({ "amount": 50000, "currency": "INR" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "pay_29QQoUBi66xm2f",
            "status": "captured"
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let payment = ctx
        .client
        .payments
        .capture(
            "pay_29QQoUBi66xm2f",
            50000,
            Some(json!({ "currency": "INR" })),
        )
        .await
        .unwrap();

    assert_eq!(payment["status"], "captured");
}

#[tokio::test]
async fn full_refund_sends_an_empty_body() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/payments/pay_29QQoUBi66xm2f/refund"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "rfnd_FP8QHiV938haTz",
            "payment_id": "pay_29QQoUBi66xm2f"
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let refund = ctx
        .client
        .payments
        .refund("pay_29QQoUBi66xm2f", None, None)
        .await
        .unwrap();

    assert_eq!(refund["id"], "rfnd_FP8QHiV938haTz");
}
