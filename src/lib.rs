//! The [Razorpay](https://razorpay.com) Rust client provides convenient access
//! to the Razorpay APIs from applications built with Rust.
//!
//! Check out also the official Razorpay [API documentation](https://razorpay.com/docs/api/).
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! First [sign up](https://dashboard.razorpay.com/signup) for a Razorpay
//! account and generate an API key pair from the dashboard. Keys generated in
//! test mode are prefixed with `rzp_test_`, live mode keys with `rzp_live_`.
//!
//! ## Initialize a new `RazorpayClient`
//!
//! Create a new [`RazorpayClient`](crate::client::RazorpayClient) and provide
//! your key id and key secret. Every request authenticates with this key pair
//! over HTTP basic auth.
//!
//! ```rust,no_run
//! # use razorpay_rust::{Error, RazorpayClient};
//! # fn main() -> Result<(), Error> {
//! let razorpay = RazorpayClient::builder("rzp_test_1DP5mmOlF5G5ag", "your-key-secret").build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Create an order
//!
//! Request and response payloads are plain [`serde_json::Value`]s, mirroring
//! the JSON documented by Razorpay for each endpoint.
//!
//! ```rust,no_run
//! # use razorpay_rust::{Error, RazorpayClient};
//! # use serde_json::json;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let razorpay: RazorpayClient = unreachable!();
//! #
//! let order = razorpay
//!     .orders
//!     .create(json!({
//!         "amount": 50000,
//!         "currency": "INR",
//!         "receipt": "receipt#1",
//!     }))
//!     .await?;
//!
//! println!("Created order: {}", order["id"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Capture a payment
//!
//! ```rust,no_run
//! # use razorpay_rust::{Error, RazorpayClient};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let razorpay: RazorpayClient = unreachable!();
//! #
//! let payment = razorpay
//!     .payments
//!     .capture("pay_29QQoUBi66xm2f", 50000, None)
//!     .await?;
//!
//! println!("Captured payment: {}", payment["id"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Verify a checkout signature
//!
//! After a payment against an order completes, Checkout hands the browser a
//! signature over `{order_id}|{payment_id}`. Verify it before marking the
//! payment as successful on your side.
//!
//! ```rust,no_run
//! # use razorpay_rust::{Error, RazorpayClient};
//! # fn main() -> Result<(), Error> {
//! # let razorpay: RazorpayClient = unreachable!();
//! # let signature: &str = unreachable!();
//! razorpay
//!     .verifier
//!     .verify_payment_signature("order_IluGWxBm9U8zJ8", "pay_IH3d0ara9bSsjQ", signature)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Retry transient failures
//!
//! Connection and timeout errors can be retried with exponential backoff.
//! Retrying is off by default and is controlled at runtime through
//! [`enable_retry`](crate::client::RazorpayClient::enable_retry).
//!
//! ```rust,no_run
//! # use razorpay_rust::{client::RetryOptions, Error, RazorpayClient};
//! # use std::time::Duration;
//! # fn main() -> Result<(), Error> {
//! let razorpay = RazorpayClient::builder("rzp_test_1DP5mmOlF5G5ag", "your-key-secret")
//!     .with_retry_options(RetryOptions {
//!         max_retries: 3,
//!         initial_delay: Duration::from_millis(500),
//!         ..RetryOptions::default()
//!     })
//!     .build()?;
//!
//! razorpay.enable_retry(true);
//! # Ok(())
//! # }
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub mod client;
mod common;
pub mod error;
mod middlewares;
pub mod signature;

pub use client::RazorpayClient;
pub use error::Error;
