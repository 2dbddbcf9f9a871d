//! Clients for the various Razorpay APIs.

use crate::{
    client::{AppDetails, Credentials},
    common::DEVICE_MODE_HEADER,
    error::Error,
};
use reqwest::{
    header::{HeaderName, HeaderValue},
    multipart::{Form, Part},
    StatusCode, Url,
};
use reqwest_middleware::ClientWithMiddleware;
use serde_json::Value;
use std::{
    fmt::{Debug, Formatter},
    sync::{atomic::AtomicBool, Arc, RwLock},
};

pub mod accounts;
pub mod addons;
pub mod cards;
pub mod customers;
pub mod device_activities;
pub mod disputes;
pub mod documents;
pub mod fund_accounts;
pub mod iins;
pub mod invoices;
pub mod items;
pub mod orders;
pub mod payment_links;
pub mod payments;
pub mod plans;
pub mod products;
pub mod qr_codes;
pub mod refunds;
pub mod registration_links;
pub mod settlements;
pub mod stakeholders;
pub mod subscriptions;
pub mod tokens;
pub mod transfers;
pub mod virtual_accounts;
pub mod webhooks;

/// Communication mode of a POS device, sent as the
/// `x-razorpay-device-mode` request header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceMode {
    Wired,
    Wireless,
}

impl DeviceMode {
    fn as_str(self) -> &'static str {
        match self {
            DeviceMode::Wired => "wired",
            DeviceMode::Wireless => "wireless",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Per-request adjustments applied by the dispatch core.
#[derive(Debug, Default)]
pub(crate) struct RequestOptions {
    /// Extra headers merged onto the request, overriding on key collisions.
    pub(crate) headers: Option<reqwest::header::HeaderMap>,
    /// Authenticate with the key id alone and a blank secret.
    pub(crate) public_auth: bool,
    pub(crate) device_mode: Option<DeviceMode>,
}

pub(crate) struct RazorpayClientInner {
    pub(crate) client: ClientWithMiddleware,
    /// Bare client sharing the same connection pool, used to assemble
    /// requests the middleware builder cannot express (multipart bodies).
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) credentials: Credentials,
    pub(crate) app_details: Arc<RwLock<Vec<AppDetails>>>,
    pub(crate) retry_enabled: Arc<AtomicBool>,
}

impl RazorpayClientInner {
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        data: Option<Value>,
    ) -> Result<Value, Error> {
        self.execute_with_options(method, path, data, RequestOptions::default())
            .await
    }

    pub(crate) async fn execute_with_options(
        &self,
        method: Method,
        path: &str,
        data: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value, Error> {
        let url = self.url(path);

        let mut request = match method {
            Method::Get => {
                let mut request = self.client.get(url);
                if let Some(data) = &data {
                    request = request.query(&query_pairs(data));
                }
                request
            }
            Method::Post => self.client.post(url).json(&json_body(data)),
            Method::Put => self.client.put(url).json(&json_body(data)),
            Method::Patch => self.client.patch(url).json(&json_body(data)),
            Method::Delete => self.client.delete(url).json(&json_body(data)),
        };

        request = request.basic_auth(&self.credentials.key_id, Some(self.password(&options)));
        if let Some(device_mode) = options.device_mode {
            request = request.header(
                HeaderName::from_static(DEVICE_MODE_HEADER),
                HeaderValue::from_static(device_mode.as_str()),
            );
        }
        if let Some(headers) = options.headers {
            request = request.headers(headers);
        }

        let response = request.send().await?;
        parse_response(response).await
    }

    /// Sends `data` as a multipart POST. The `"file"` key becomes the single
    /// file part (absent key sends an empty file) and every other key a text
    /// field. Multipart bodies cannot be replayed, so the request makes a
    /// single attempt regardless of the retry configuration.
    pub(crate) async fn execute_upload(&self, path: &str, data: Value) -> Result<Value, Error> {
        let url = self.url(path);

        let request = self
            .http
            .post(url)
            .basic_auth(
                &self.credentials.key_id,
                Some(self.credentials.key_secret.expose_secret()),
            )
            .multipart(multipart_form(&data))
            .build()
            .map_err(Error::HttpError)?;

        let response = self.client.execute(request).await?;
        parse_response(response).await
    }

    /// Appends `path` to the configured base URL verbatim, preserving any
    /// path prefix the base URL carries (`Url::join` would discard it for
    /// the absolute paths the API clients use).
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn password(&self, options: &RequestOptions) -> &str {
        if options.public_auth {
            ""
        } else {
            self.credentials.key_secret.expose_secret()
        }
    }
}

impl Debug for RazorpayClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayClientInner")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

async fn parse_response(response: reqwest::Response) -> Result<Value, Error> {
    if response.status() == StatusCode::NO_CONTENT {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    response.json().await.map_err(Error::HttpError)
}

/// Write verbs always carry a JSON body, an empty object when no data is given.
fn json_body(data: Option<Value>) -> Value {
    data.unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

/// Flattens a JSON object into query pairs. Array values repeat the key.
fn query_pairs(data: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Some(object) = data.as_object() {
        for (key, value) in object {
            match value {
                Value::Array(values) => {
                    pairs.extend(values.iter().map(|v| (key.clone(), render_scalar(v))))
                }
                other => pairs.push((key.clone(), render_scalar(other))),
            }
        }
    }
    pairs
}

fn multipart_form(data: &Value) -> Form {
    let contents = data
        .get("file")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned();
    let mut form = Form::new().part("file", Part::bytes(contents.into_bytes()).file_name("file"));
    if let Some(object) = data.as_object() {
        for (key, value) in object {
            if key != "file" {
                form = form.text(key.clone(), render_scalar(value));
            }
        }
    }
    form
}

/// Renders a JSON value without the quoting `Value::to_string` adds to strings.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
