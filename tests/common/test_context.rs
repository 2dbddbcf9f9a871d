use razorpay_rust::{client::RetryOptions, RazorpayClient};
use std::time::Duration;
use url::Url;
use wiremock::MockServer;

pub const KEY_ID: &str = "rzp_test_sVJGvJgKkPkRWI";
pub const KEY_SECRET: &str = "a9S8RtCJmJRrqyWJEWCqGKVG";

/// A mock Razorpay server and a client configured against it.
///
/// The client starts out with retrying disabled, as any freshly built client
/// does; tests opt in through `enable_retry`. Retry delays are kept short so
/// retry tests stay fast.
pub struct TestContext {
    pub client: RazorpayClient,
    pub mock_server: MockServer,
}

impl TestContext {
    pub async fn start() -> Self {
        Self::start_with_http_client(reqwest::Client::new()).await
    }

    /// Starts a context whose client times out stalled requests after 100ms,
    /// so a delayed mock response can stand in for a transient transport
    /// failure.
    pub async fn start_with_fast_timeout() -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        Self::start_with_http_client(http).await
    }

    async fn start_with_http_client(http: reqwest::Client) -> Self {
        let mock_server = MockServer::start().await;

        let client = RazorpayClient::builder(KEY_ID, KEY_SECRET)
            .with_http_client(http)
            .with_base_url(Url::parse(&mock_server.uri()).unwrap())
            .with_retry_options(RetryOptions {
                max_retries: 5,
                initial_delay: Duration::from_millis(10),
                max_delay: Duration::from_millis(40),
                jitter: 0.0,
            })
            .build()
            .unwrap();

        Self {
            client,
            mock_server,
        }
    }
}
