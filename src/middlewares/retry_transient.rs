use crate::client::RetryOptions;
use async_trait::async_trait;
use rand::Rng;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};
use task_local_extensions::Extensions;

/// Middleware that retries transient failures of the underlying transport.
///
/// Only connection and timeout errors are retried. Responses produced by the
/// server pass through untouched whatever their status; classifying them is
/// the error handling middleware's job, and an HTTP error is not a reason to
/// retry.
///
/// Retrying is governed by a shared flag so it can be toggled after the
/// client is built. While the flag is off every request makes a single
/// attempt. While it is on, a request makes at most
/// [`max_retries`](RetryOptions::max_retries) attempts, sleeping between them
/// with an exponentially growing, jittered delay capped at
/// [`max_delay`](RetryOptions::max_delay).
pub struct RetryTransientMiddleware {
    options: RetryOptions,
    enabled: Arc<AtomicBool>,
}

impl RetryTransientMiddleware {
    pub fn new(options: RetryOptions, enabled: Arc<AtomicBool>) -> Self {
        Self { options, enabled }
    }

    fn max_attempts(&self) -> u32 {
        if self.enabled.load(Ordering::Relaxed) {
            self.options.max_retries.max(1)
        } else {
            1
        }
    }
}

#[async_trait]
impl Middleware for RetryTransientMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let max_attempts = self.max_attempts();
        let mut delay = self.options.initial_delay;
        let mut attempt = 1;

        loop {
            let request = match req.try_clone() {
                Some(request) => request,
                // Streaming bodies cannot be replayed, so make a single attempt
                None => return next.run(req, extensions).await,
            };

            let error = match next.clone().run(request, extensions).await {
                Ok(response) => return Ok(response),
                Err(error) => error,
            };

            if !is_transient(&error) {
                return Err(error);
            }
            if attempt >= max_attempts {
                tracing::error!(
                    "Transient transport error after {} attempt(s), retries disabled or exhausted: {}",
                    attempt,
                    error
                );
                return Err(error);
            }

            let sleep_for = jittered(delay, self.options.jitter).min(self.options.max_delay);
            tracing::warn!(
                "Transient transport error: {}. Retrying in {:.2?} (attempt {}/{})",
                error,
                sleep_for,
                attempt,
                max_attempts
            );
            tokio::time::sleep(sleep_for).await;

            delay = delay.saturating_mul(2).min(self.options.max_delay);
            attempt += 1;
        }
    }
}

fn is_transient(error: &reqwest_middleware::Error) -> bool {
    match error {
        reqwest_middleware::Error::Reqwest(e) => e.is_connect() || e.is_timeout(),
        reqwest_middleware::Error::Middleware(_) => false,
    }
}

/// Scales `delay` by a factor drawn uniformly from `1 - jitter ..= 1 + jitter`.
fn jittered(delay: Duration, jitter: f64) -> Duration {
    if jitter == 0.0 {
        return delay;
    }
    let factor = 1.0 + rand::thread_rng().gen_range(-jitter..=jitter);
    delay.mul_f64(factor.max(0.0))
}
