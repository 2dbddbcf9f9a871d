//! Module containing the main Razorpay API client.

use crate::{
    apis::{
        accounts::AccountsApi, addons::AddonsApi, cards::CardsApi, customers::CustomersApi,
        device_activities::DeviceActivitiesApi, disputes::DisputesApi, documents::DocumentsApi,
        fund_accounts::FundAccountsApi, iins::IinsApi, invoices::InvoicesApi, items::ItemsApi,
        orders::OrdersApi, payment_links::PaymentLinksApi, payments::PaymentsApi, plans::PlansApi,
        products::ProductsApi, qr_codes::QrCodesApi, refunds::RefundsApi,
        registration_links::RegistrationLinksApi, settlements::SettlementsApi,
        stakeholders::StakeholdersApi, subscriptions::SubscriptionsApi, tokens::TokensApi,
        transfers::TransfersApi, virtual_accounts::VirtualAccountsApi, webhooks::WebhooksApi,
        RazorpayClientInner,
    },
    common::DEFAULT_BASE_URL,
    error::Error,
    middlewares::{
        error_handling::ErrorHandlingMiddleware, inject_user_agent::InjectUserAgentMiddleware,
        retry_transient::RetryTransientMiddleware,
    },
    signature::SignatureVerifier,
};
use anyhow::{anyhow, Context};
use reqwest::{Certificate, Url};
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, Secret};
use std::{
    path::{Path, PathBuf},
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, PoisonError, RwLock,
    },
    time::Duration,
};

/// A secret string, such as an API key secret or a webhook secret.
///
/// The wrapped value is redacted from `Debug` output.
#[derive(Clone, Debug)]
pub struct Token(Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

/// API key pair identifying the merchant, sent as HTTP basic auth on every
/// request.
#[derive(Clone, Debug)]
pub(crate) struct Credentials {
    pub(crate) key_id: String,
    pub(crate) key_secret: Token,
}

/// Details of an app built on top of the client, advertised in the
/// `User-Agent` header of every outgoing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppDetails {
    pub title: String,
    pub version: Option<String>,
}

impl AppDetails {
    /// Creates new app details with the given title and no version.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: None,
        }
    }

    /// Sets the app version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }
}

/// Backoff configuration used when retrying requests that failed with a
/// transient transport error.
///
/// Delays double after every failed attempt, are spread by a relative
/// `jitter`, and are capped at `max_delay`.
#[derive(Clone, Debug, PartialEq)]
pub struct RetryOptions {
    /// Total number of attempts a request may make, the first try included.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound on the delay between two attempts.
    pub max_delay: Duration,
    /// Relative jitter applied to every delay, within `0.0..=1.0`.
    ///
    /// A jitter of `0.25` spreads each delay uniformly between 75% and 125%
    /// of its nominal value.
    pub jitter: f64,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_retries: 5,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(60),
            jitter: 0.25,
        }
    }
}

impl RetryOptions {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.initial_delay > self.max_delay {
            return Err(Error::Other(anyhow!(
                "invalid retry options: initial_delay ({:?}) exceeds max_delay ({:?})",
                self.initial_delay,
                self.max_delay
            )));
        }
        if !(0.0..=1.0).contains(&self.jitter) {
            return Err(Error::Other(anyhow!(
                "invalid retry options: jitter ({}) must be within 0.0..=1.0",
                self.jitter
            )));
        }
        Ok(())
    }
}

/// Client for the Razorpay APIs.
///
/// Grants access to one resource client per API family, all sharing the same
/// HTTP connection pool, credentials and configuration. Cloning the client is
/// cheap and clones share their configuration.
#[derive(Clone, Debug)]
pub struct RazorpayClient {
    /// Accounts APIs client.
    pub accounts: AccountsApi,
    /// Addons APIs client.
    pub addons: AddonsApi,
    /// Cards APIs client.
    pub cards: CardsApi,
    /// Customers APIs client.
    pub customers: CustomersApi,
    /// POS device activities APIs client.
    pub device_activities: DeviceActivitiesApi,
    /// Disputes APIs client.
    pub disputes: DisputesApi,
    /// Documents APIs client.
    pub documents: DocumentsApi,
    /// Fund accounts APIs client.
    pub fund_accounts: FundAccountsApi,
    /// Card IINs APIs client.
    pub iins: IinsApi,
    /// Invoices APIs client.
    pub invoices: InvoicesApi,
    /// Items APIs client.
    pub items: ItemsApi,
    /// Orders APIs client.
    pub orders: OrdersApi,
    /// Payment links APIs client.
    pub payment_links: PaymentLinksApi,
    /// Payments APIs client.
    pub payments: PaymentsApi,
    /// Plans APIs client.
    pub plans: PlansApi,
    /// Products APIs client.
    pub products: ProductsApi,
    /// QR codes APIs client.
    pub qr_codes: QrCodesApi,
    /// Refunds APIs client.
    pub refunds: RefundsApi,
    /// Registration links APIs client.
    pub registration_links: RegistrationLinksApi,
    /// Settlements APIs client.
    pub settlements: SettlementsApi,
    /// Stakeholders APIs client.
    pub stakeholders: StakeholdersApi,
    /// Subscriptions APIs client.
    pub subscriptions: SubscriptionsApi,
    /// Tokens APIs client.
    pub tokens: TokensApi,
    /// Transfers APIs client.
    pub transfers: TransfersApi,
    /// Virtual accounts APIs client.
    pub virtual_accounts: VirtualAccountsApi,
    /// Webhooks APIs client.
    pub webhooks: WebhooksApi,
    /// Verifier for webhook and checkout signatures, bound to the client's
    /// key secret.
    pub verifier: SignatureVerifier,
    inner: Arc<RazorpayClientInner>,
}

impl RazorpayClient {
    /// Returns a new builder to construct a [`RazorpayClient`] with the given
    /// API key pair.
    pub fn builder(
        key_id: impl Into<String>,
        key_secret: impl Into<Token>,
    ) -> RazorpayClientBuilder {
        RazorpayClientBuilder::new(key_id, key_secret)
    }

    /// Registers an app to be advertised in the `User-Agent` header of every
    /// subsequent request.
    pub fn add_app_details(&self, details: AppDetails) {
        self.inner
            .app_details
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(details);
    }

    /// Returns a snapshot of the registered app details.
    pub fn app_details(&self) -> Vec<AppDetails> {
        self.inner
            .app_details
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Turns retrying of transient transport failures on or off.
    ///
    /// Retrying starts out disabled: every request makes a single attempt
    /// until enabled here.
    pub fn enable_retry(&self, enabled: bool) {
        self.inner.retry_enabled.store(enabled, Ordering::Relaxed);
    }
}

/// Builder for a [`RazorpayClient`].
#[derive(Debug)]
pub struct RazorpayClientBuilder {
    client: Option<reqwest::Client>,
    base_url: Url,
    credentials: Credentials,
    retry_options: RetryOptions,
    ca_bundle: Option<PathBuf>,
}

impl RazorpayClientBuilder {
    /// Creates a new builder with the given API key pair and default
    /// configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<Token>) -> Self {
        Self {
            client: None,
            base_url: Url::parse(DEFAULT_BASE_URL).unwrap(),
            credentials: Credentials {
                key_id: key_id.into(),
                key_secret: key_secret.into(),
            },
            retry_options: RetryOptions::default(),
            ca_bundle: None,
        }
    }

    /// Sets the base URL requests are sent to.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets the `reqwest` client used to send requests, replacing the default
    /// one.
    ///
    /// Incompatible with [`with_ca_bundle`](Self::with_ca_bundle): extra root
    /// certificates cannot be added to an already built client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets the backoff configuration used when retrying transient transport
    /// failures.
    pub fn with_retry_options(mut self, retry_options: RetryOptions) -> Self {
        self.retry_options = retry_options;
        self
    }

    /// Adds the PEM certificates at the given path to the set of trusted
    /// roots.
    pub fn with_ca_bundle(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_bundle = Some(path.into());
        self
    }

    /// Consumes the builder and builds a new [`RazorpayClient`].
    pub fn build(self) -> Result<RazorpayClient, Error> {
        self.retry_options.validate()?;

        let http = match (self.client, &self.ca_bundle) {
            (Some(_), Some(_)) => {
                return Err(Error::Other(anyhow!(
                    "with_http_client and with_ca_bundle cannot be combined"
                )));
            }
            (Some(client), None) => client,
            (None, ca_bundle) => build_http_client(ca_bundle.as_deref()).map_err(Error::Other)?,
        };

        let app_details = Arc::new(RwLock::new(Vec::new()));
        let retry_enabled = Arc::new(AtomicBool::new(false));
        let client = build_client_with_middleware(
            http.clone(),
            app_details.clone(),
            self.retry_options,
            retry_enabled.clone(),
        );

        let verifier = SignatureVerifier::new(self.credentials.key_secret.clone());
        let inner = Arc::new(RazorpayClientInner {
            client,
            http,
            base_url: self.base_url,
            credentials: self.credentials,
            app_details,
            retry_enabled,
        });

        Ok(RazorpayClient {
            accounts: AccountsApi::new(inner.clone()),
            addons: AddonsApi::new(inner.clone()),
            cards: CardsApi::new(inner.clone()),
            customers: CustomersApi::new(inner.clone()),
            device_activities: DeviceActivitiesApi::new(inner.clone()),
            disputes: DisputesApi::new(inner.clone()),
            documents: DocumentsApi::new(inner.clone()),
            fund_accounts: FundAccountsApi::new(inner.clone()),
            iins: IinsApi::new(inner.clone()),
            invoices: InvoicesApi::new(inner.clone()),
            items: ItemsApi::new(inner.clone()),
            orders: OrdersApi::new(inner.clone()),
            payment_links: PaymentLinksApi::new(inner.clone()),
            payments: PaymentsApi::new(inner.clone()),
            plans: PlansApi::new(inner.clone()),
            products: ProductsApi::new(inner.clone()),
            qr_codes: QrCodesApi::new(inner.clone()),
            refunds: RefundsApi::new(inner.clone()),
            registration_links: RegistrationLinksApi::new(inner.clone()),
            settlements: SettlementsApi::new(inner.clone()),
            stakeholders: StakeholdersApi::new(inner.clone()),
            subscriptions: SubscriptionsApi::new(inner.clone()),
            tokens: TokensApi::new(inner.clone()),
            transfers: TransfersApi::new(inner.clone()),
            virtual_accounts: VirtualAccountsApi::new(inner.clone()),
            webhooks: WebhooksApi::new(inner.clone()),
            verifier,
            inner,
        })
    }
}

fn build_http_client(ca_bundle: Option<&Path>) -> anyhow::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(path) = ca_bundle {
        let pem = std::fs::read(path)
            .with_context(|| format!("Failed to read CA bundle at {}", path.display()))?;
        let certificates =
            Certificate::from_pem_bundle(&pem).context("Failed to parse CA bundle")?;
        for certificate in certificates {
            builder = builder.add_root_certificate(certificate);
        }
    }
    builder.build().context("Failed to build HTTP client")
}

fn build_client_with_middleware(
    client: reqwest::Client,
    app_details: Arc<RwLock<Vec<AppDetails>>>,
    retry_options: RetryOptions,
    retry_enabled: Arc<AtomicBool>,
) -> ClientWithMiddleware {
    reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(InjectUserAgentMiddleware::new(app_details))
        .with(ErrorHandlingMiddleware)
        .with(RetryTransientMiddleware::new(retry_options, retry_enabled))
        .build()
}
