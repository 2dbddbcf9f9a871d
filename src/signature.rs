//! Verification of Razorpay payment and webhook signatures.
//!
//! Razorpay signs checkout callbacks and webhook deliveries with
//! HMAC-SHA256, hex-encoded. [`SignatureVerifier`] exposes one method per
//! documented signature scheme; [`verify`] is the underlying primitive.

use crate::{client::Token, error::SignatureVerificationError};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verifies a hex-encoded `signature` against the HMAC-SHA256 of `message`
/// keyed by `secret`.
///
/// The comparison runs in constant time. Malformed hex, a truncated
/// signature and a MAC mismatch are all reported as the same error.
pub fn verify(
    message: &[u8],
    signature: &str,
    secret: &str,
) -> Result<(), SignatureVerificationError> {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).map_err(|_| SignatureVerificationError)?;
    mac.update(message);

    let signature = hex::decode(signature).map_err(|_| SignatureVerificationError)?;
    mac.verify_slice(&signature)
        .map_err(|_| SignatureVerificationError)
}

/// Signature verification utilities bound to the client credentials.
///
/// Accessible through the `verifier` field of a
/// [`RazorpayClient`](crate::client::RazorpayClient). Methods taking an
/// optional `secret` fall back to the configured key secret when `None` is
/// passed.
#[derive(Clone, Debug)]
pub struct SignatureVerifier {
    key_secret: Token,
}

impl SignatureVerifier {
    pub(crate) fn new(key_secret: Token) -> Self {
        Self { key_secret }
    }

    /// Verifies the signature returned by Checkout once a payment against an
    /// order completes.
    ///
    /// The signed message is `{order_id}|{payment_id}`.
    pub fn verify_payment_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<(), SignatureVerificationError> {
        let message = format!("{}|{}", order_id, payment_id);
        verify(
            message.as_bytes(),
            signature,
            self.key_secret.expose_secret(),
        )
    }

    /// Verifies the signature attached to a payment link callback.
    ///
    /// The signed message is
    /// `{payment_link_id}|{payment_link_reference_id}|{payment_link_status}|{payment_id}`.
    pub fn verify_payment_link_signature(
        &self,
        payment_link_id: &str,
        payment_link_reference_id: &str,
        payment_link_status: &str,
        payment_id: &str,
        signature: &str,
        secret: Option<&str>,
    ) -> Result<(), SignatureVerificationError> {
        let message = format!(
            "{}|{}|{}|{}",
            payment_link_id, payment_link_reference_id, payment_link_status, payment_id
        );
        verify(
            message.as_bytes(),
            signature,
            secret.unwrap_or_else(|| self.key_secret.expose_secret()),
        )
    }

    /// Verifies the signature confirming a recurring payment against a
    /// subscription.
    ///
    /// The signed message is `{payment_id}|{subscription_id}`.
    pub fn verify_subscription_payment_signature(
        &self,
        payment_id: &str,
        subscription_id: &str,
        signature: &str,
        secret: Option<&str>,
    ) -> Result<(), SignatureVerificationError> {
        let message = format!("{}|{}", payment_id, subscription_id);
        verify(
            message.as_bytes(),
            signature,
            secret.unwrap_or_else(|| self.key_secret.expose_secret()),
        )
    }

    /// Verifies the `X-Razorpay-Signature` header of a webhook delivery.
    ///
    /// `body` must be the raw request body exactly as received; webhook
    /// signatures are computed over the bytes on the wire, not over a
    /// re-serialized copy. `secret` is the webhook secret configured in the
    /// Razorpay dashboard, which is distinct from the API key secret.
    pub fn verify_webhook_signature(
        &self,
        body: &[u8],
        signature: &str,
        secret: &str,
    ) -> Result<(), SignatureVerificationError> {
        verify(body, signature, secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(message: &[u8], secret: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }

    fn corrupt(signature: &str) -> String {
        let replacement = if signature.starts_with('0') { "1" } else { "0" };
        format!("{}{}", replacement, &signature[1..])
    }

    fn verifier() -> SignatureVerifier {
        SignatureVerifier::new(Token::new("key_secret"))
    }

    #[test]
    fn matches_rfc_4231_test_vector() {
        // Test case 2 from RFC 4231.
        let signature = "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843";
        assert!(verify(b"what do ya want for nothing?", signature, "Jefe").is_ok());
    }

    #[test]
    fn accepts_a_signature_computed_with_the_same_secret() {
        let signature = sign(b"some message", "key_secret");
        assert!(verify(b"some message", &signature, "key_secret").is_ok());
    }

    #[test]
    fn rejects_a_signature_differing_in_one_character() {
        let signature = corrupt(&sign(b"some message", "key_secret"));
        assert_eq!(
            verify(b"some message", &signature, "key_secret"),
            Err(SignatureVerificationError)
        );
    }

    #[test]
    fn rejects_a_signature_computed_with_another_secret() {
        let signature = sign(b"some message", "other_secret");
        assert_eq!(
            verify(b"some message", &signature, "key_secret"),
            Err(SignatureVerificationError)
        );
    }

    #[test]
    fn rejects_non_hex_and_truncated_signatures() {
        let signature = sign(b"some message", "key_secret");
        assert!(verify(b"some message", "not-hex!", "key_secret").is_err());
        assert!(verify(b"some message", &signature[..32], "key_secret").is_err());
        assert!(verify(b"some message", "", "key_secret").is_err());
    }

    #[test]
    fn payment_signature_signs_order_and_payment_ids() {
        let signature = sign(b"order_IluGWxBm9U8zJ8|pay_IluGWxBm9U8zJ9", "key_secret");

        assert!(verifier()
            .verify_payment_signature("order_IluGWxBm9U8zJ8", "pay_IluGWxBm9U8zJ9", &signature)
            .is_ok());
        assert!(verifier()
            .verify_payment_signature("order_IluGWxBm9U8zJ8", "pay_other", &signature)
            .is_err());
    }

    #[test]
    fn payment_link_signature_signs_all_four_fields_in_order() {
        let message = b"plink_IH3cNucfVEgV68|ref_1|paid|pay_IH3cNucfVEgV69";
        let signature = sign(message, "key_secret");

        assert!(verifier()
            .verify_payment_link_signature(
                "plink_IH3cNucfVEgV68",
                "ref_1",
                "paid",
                "pay_IH3cNucfVEgV69",
                &signature,
                None,
            )
            .is_ok());
    }

    #[test]
    fn payment_link_signature_honors_the_secret_override() {
        let message = b"plink_IH3cNucfVEgV68|ref_1|paid|pay_IH3cNucfVEgV69";
        let signature = sign(message, "override_secret");

        let verifier = verifier();
        assert!(verifier
            .verify_payment_link_signature(
                "plink_IH3cNucfVEgV68",
                "ref_1",
                "paid",
                "pay_IH3cNucfVEgV69",
                &signature,
                Some("override_secret"),
            )
            .is_ok());
        // Without the override the client secret is used, which cannot match.
        assert!(verifier
            .verify_payment_link_signature(
                "plink_IH3cNucfVEgV68",
                "ref_1",
                "paid",
                "pay_IH3cNucfVEgV69",
                &signature,
                None,
            )
            .is_err());
    }

    #[test]
    fn subscription_signature_signs_payment_then_subscription_id() {
        let signature = sign(b"pay_IDZNwZZFtnjyym|sub_ID6MOhgkcoHj9I", "key_secret");

        assert!(verifier()
            .verify_subscription_payment_signature(
                "pay_IDZNwZZFtnjyym",
                "sub_ID6MOhgkcoHj9I",
                &signature,
                None,
            )
            .is_ok());
        assert!(verifier()
            .verify_subscription_payment_signature(
                "sub_ID6MOhgkcoHj9I",
                "pay_IDZNwZZFtnjyym",
                &signature,
                None,
            )
            .is_err());
    }

    #[test]
    fn webhook_signature_covers_the_raw_body() {
        let body = br#"{"entity":"event","event":"payment.captured"}"#;
        let signature = sign(body, "webhook_secret");

        let verifier = verifier();
        assert!(verifier
            .verify_webhook_signature(body, &signature, "webhook_secret")
            .is_ok());
        assert!(verifier
            .verify_webhook_signature(body, &signature, "wrong_secret")
            .is_err());
        assert!(verifier
            .verify_webhook_signature(b"{}", &signature, "webhook_secret")
            .is_err());
    }
}
