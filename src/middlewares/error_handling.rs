use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses returned from the
/// Razorpay APIs into [`Error::ApiError`](crate::error::Error)s.
///
/// Any response outside the 2xx range is consumed here; callers never see
/// the raw response for a failed request.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Capture the response
        let response = next.run(req, extensions).await?;

        // Build an ApiError if the response is not a success
        if !response.status().is_success() {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let api_error = api_error_from_response(response).await?;
            return Err(Error::ApiError(api_error).into());
        }

        Ok(response)
    }
}

/// Body of an error response from the Razorpay APIs.
#[derive(serde::Deserialize, Debug, Default)]
struct ErrorResponseBody {
    #[serde(default)]
    error: ErrorBody,
}

#[derive(serde::Deserialize, Debug, Default)]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    description: String,
}

async fn api_error_from_response(response: Response) -> reqwest_middleware::Result<ApiError> {
    let status = response.status();

    // Parse the response body as JSON
    let bytes = response.bytes().await?;
    let api_error = match serde_json::from_slice::<ErrorResponseBody>(&bytes) {
        Ok(body) => ApiError::from_code(&body.error.code, body.error.description),
        Err(_) => {
            let text = String::from_utf8_lossy(&bytes);
            let description = if text.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                format!("non-JSON response: {}", text)
            };
            ApiError::Server(description)
        }
    };

    Ok(api_error)
}
