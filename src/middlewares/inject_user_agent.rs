use crate::client::AppDetails;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use std::sync::{Arc, PoisonError, RwLock};
use task_local_extensions::Extensions;

static PRODUCT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Middleware to inject the `User-Agent` header to all outgoing requests.
///
/// The header starts with the library product tag and is followed by one
/// entry per [`AppDetails`] registered on the client. The list is read on
/// every request, so entries added after the client was built are picked up
/// too.
pub struct InjectUserAgentMiddleware {
    app_details: Arc<RwLock<Vec<AppDetails>>>,
}

impl InjectUserAgentMiddleware {
    pub fn new(app_details: Arc<RwLock<Vec<AppDetails>>>) -> Self {
        Self { app_details }
    }

    fn user_agent(&self) -> String {
        let mut user_agent = PRODUCT.to_string();

        let app_details = self
            .app_details
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for app in app_details.iter() {
            user_agent.push(' ');
            user_agent.push_str(&app.title);
            if let Some(version) = &app.version {
                user_agent.push('/');
                user_agent.push_str(version);
            }
        }

        user_agent
    }
}

#[async_trait]
impl Middleware for InjectUserAgentMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let user_agent = HeaderValue::from_str(&self.user_agent())
            .unwrap_or_else(|_| HeaderValue::from_static(PRODUCT));
        req.headers_mut().insert(USER_AGENT, user_agent);

        next.run(req, extensions).await
    }
}
