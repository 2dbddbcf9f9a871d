use crate::common::test_context::TestContext;
use razorpay_rust::error::SignatureVerificationError;

// HMAC-SHA256("order_IluGWxBm9U8zJ8|pay_IH3d0ara9bSsjQ", KEY_SECRET), hex.
const PAYMENT_SIGNATURE: &str = "ceb369a4de1621d41778a03c5b1235ec9487cd75df91fe266eabc844057de53f";

#[tokio::test]
async fn accepts_a_checkout_payment_signature() {
    let ctx = TestContext::start().await;

    assert!(ctx
        .client
        .verifier
        .verify_payment_signature("order_IluGWxBm9U8zJ8", "pay_IH3d0ara9bSsjQ", PAYMENT_SIGNATURE)
        .is_ok());
}

#[tokio::test]
async fn accepts_uppercase_hex_signatures() {
    let ctx = TestContext::start().await;

    assert!(ctx
        .client
        .verifier
        .verify_payment_signature(
            "order_IluGWxBm9U8zJ8",
            "pay_IH3d0ara9bSsjQ",
            &PAYMENT_SIGNATURE.to_uppercase(),
        )
        .is_ok());
}

#[tokio::test]
async fn rejects_a_tampered_signature() {
    let ctx = TestContext::start().await;
    let tampered = format!("d{}", &PAYMENT_SIGNATURE[1..]);

    assert_eq!(
        ctx.client.verifier.verify_payment_signature(
            "order_IluGWxBm9U8zJ8",
            "pay_IH3d0ara9bSsjQ",
            &tampered,
        ),
        Err(SignatureVerificationError)
    );
}

#[tokio::test]
async fn verifies_webhook_deliveries_against_the_webhook_secret() {
    let ctx = TestContext::start().await;
    let body = br#"{"entity":"event","event":"payment.captured","contains":["payment"]}"#;
    let signature = "3f3458f1b33ab24092f5b0f16071002e33d41fa0525c1ce4afeaab4af4cee726";

    assert!(ctx
        .client
        .verifier
        .verify_webhook_signature(body, signature, "webhook-secret-42")
        .is_ok());

    // A wrong secret must surface as an error, never as a silent pass.
    assert_eq!(
        ctx.client
            .verifier
            .verify_webhook_signature(body, signature, "another-secret"),
        Err(SignatureVerificationError)
    );
}
