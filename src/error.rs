//! Standard errors used by all functions in the crate.

/// Error collecting all possible failures of the Razorpay client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport-level failure. The request never produced an HTTP response,
    /// or the response body could not be read.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Error returned by a Razorpay API endpoint.
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// A payment or webhook signature failed verification.
    #[error(transparent)]
    SignatureVerificationError(#[from] SignatureVerificationError),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Razorpay HTTP APIs error.
///
/// The variant is chosen from the `code` field of the error body returned by
/// the API; the carried string is the server-provided description.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API rejected the request as malformed or not allowed
    /// (`BAD_REQUEST_ERROR`).
    #[error("Razorpay bad request error: {0}")]
    BadRequest(String),
    /// An upstream payment gateway failed to process the request
    /// (`GATEWAY_ERROR`).
    #[error("Razorpay gateway error: {0}")]
    Gateway(String),
    /// Any other failure reported by the API, including unrecognized error
    /// codes and unparseable error bodies.
    #[error("Razorpay server error: {0}")]
    Server(String),
}

impl ApiError {
    /// Classifies an error body by its `code` field.
    ///
    /// Codes are matched case-insensitively; anything unrecognized maps to
    /// [`ApiError::Server`].
    pub(crate) fn from_code(code: &str, description: String) -> Self {
        match code.to_uppercase().as_str() {
            "BAD_REQUEST_ERROR" => ApiError::BadRequest(description),
            "GATEWAY_ERROR" => ApiError::Gateway(description),
            _ => ApiError::Server(description),
        }
    }
}

/// Failure raised when a payment or webhook signature does not match the
/// expected HMAC.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("signature verification failed")]
pub struct SignatureVerificationError;
