use crate::common::test_context::{TestContext, KEY_ID, KEY_SECRET};
use serde_json::json;
use wiremock::{
    matchers::{basic_auth, body_json, method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn fetch_order() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/orders/order_123"))
        .and(basic_auth(KEY_ID, KEY_SECRET))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "order_123",
            "amount": 500
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let order = ctx.client.orders.fetch("order_123", None).await.unwrap();

    assert_eq!(order, json!({ "id": "order_123", "amount": 500 }));
}

#[tokio::test]
async fn create_order() {
    let ctx = TestContext::start().await;

    let data = json!({
        "amount": 50000,
        "currency": "INR",
        "receipt": "receipt#1",
    });
    Mock::given(method("POST"))
        .and(path("/v1/orders"))
        .and(basic_auth(KEY_ID, KEY_SECRET))
        .and(body_json(&data))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "order_EKwxwAgItmmXdp",
            "amount": 50000,
            "currency": "INR",
            "status": "created"
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let order = ctx.client.orders.create(data).await.unwrap();

    assert_eq!(order["id"], "order_EKwxwAgItmmXdp");
    assert_eq!(order["status"], "created");
}

#[tokio::test]
async fn list_orders_forwards_pagination_filters() {
    let ctx = TestContext::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/orders"))
        .and(query_param("count", "5"))
        .and(query_param("skip", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entity": "collection",
            "count": 0,
            "items": []
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let orders = ctx
        .client
        .orders
        .all(Some(json!({ "count": 5, "skip": 10 })))
        .await
        .unwrap();

    assert_eq!(orders["items"], json!([]));
}
