use crate::common::{header_value, test_context::{TestContext, KEY_ID, KEY_SECRET}};
use serde_json::json;
use wiremock::{
    matchers::{basic_auth, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn uploading_a_document_sends_a_multipart_form() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/documents"))
        .and(basic_auth(KEY_ID, KEY_SECRET))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "doc_EsyWjHrfzb59Re",
            "purpose": "dispute_evidence"
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    let document = ctx
        .client
        .documents
        .create(json!({
            "file": "%PDF-1.4 fake invoice bytes",
            "purpose": "dispute_evidence",
        }))
        .await
        .unwrap();

    assert_eq!(document["id"], "doc_EsyWjHrfzb59Re");

    let requests = ctx.mock_server.received_requests().await.unwrap();
    let content_type = header_value(&requests[0], "content-type").unwrap();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("%PDF-1.4 fake invoice bytes"));
    assert!(body.contains("name=\"purpose\""));
    assert!(body.contains("dispute_evidence"));
}

#[tokio::test]
async fn uploads_without_file_contents_still_send_the_file_part() {
    let ctx = TestContext::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/accounts/acc_M2G5mNDGnMCsSL/documents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "business_proof_of_identification": []
        })))
        .expect(1)
        .mount(&ctx.mock_server)
        .await;

    ctx.client
        .accounts
        .upload_account_doc(
            "acc_M2G5mNDGnMCsSL",
            json!({ "document_type": "business_proof_url" }),
        )
        .await
        .unwrap();

    let requests = ctx.mock_server.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("name=\"document_type\""));
    assert!(body.contains("business_proof_url"));
}
