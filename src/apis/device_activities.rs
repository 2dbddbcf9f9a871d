use crate::{
    apis::{DeviceMode, Method, RazorpayClientInner, RequestOptions},
    error::ApiError,
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Razorpay Device Activities APIs client, for the POS gateway.
///
/// These endpoints authenticate with the key id alone (no secret) and
/// optionally announce the device communication mode through a header.
#[derive(Clone, Debug)]
pub struct DeviceActivitiesApi {
    inner: Arc<RazorpayClientInner>,
}

impl DeviceActivitiesApi {
    pub(crate) fn new(inner: Arc<RazorpayClientInner>) -> Self {
        Self { inner }
    }

    /// Creates a new device activity.
    #[tracing::instrument(name = "Create Device Activity", skip(self, data))]
    pub async fn create(
        &self,
        data: Value,
        device_mode: Option<DeviceMode>,
    ) -> Result<Value, Error> {
        let options = RequestOptions {
            public_auth: true,
            device_mode,
            ..Default::default()
        };
        self.inner
            .execute_with_options(
                Method::Post,
                "/v1/pos/device/activities",
                Some(data),
                options,
            )
            .await
    }

    /// Gets the status of a device activity.
    #[tracing::instrument(name = "Fetch Device Activity Status", skip(self))]
    pub async fn status(
        &self,
        activity_id: &str,
        device_mode: Option<DeviceMode>,
    ) -> Result<Value, Error> {
        if activity_id.is_empty() {
            return Err(ApiError::BadRequest("Activity ID must be provided".to_owned()).into());
        }

        let options = RequestOptions {
            public_auth: true,
            device_mode,
            ..Default::default()
        };
        self.inner
            .execute_with_options(
                Method::Get,
                &format!("/v1/pos/device/activities/{}", encode(activity_id)),
                None,
                options,
            )
            .await
    }
}
