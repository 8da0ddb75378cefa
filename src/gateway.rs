//! The request-routing facade.

use crate::auth::{Authenticator, StaticTokenAuthenticator};
use crate::backend::{Backend, LlmBackend};
use crate::config::GatewayConfig;
use crate::exchange::Exchange;
use crate::request::{Payload, Request};
use crate::response::Response;
use crate::token::Token;

/// Single entry point in front of the authenticator and the backend.
///
/// Clients talk only to the gateway. For each call it:
/// 1. verifies the token (invalid → [`Response::Unauthorized`], backend untouched)
/// 2. matches the path against the work route (no match → [`Response::NotFound`])
/// 3. forwards the resolved role and the payload's prompt to the backend
///
/// The gateway holds no mutable state, so calls are independent and it can
/// be shared across threads when its collaborators can.
///
/// # Examples
///
/// ```
/// use gateway_patterns::{Gateway, Payload, Response, Token};
/// use serde_json::json;
///
/// let gateway = Gateway::with_defaults();
///
/// let mut payload = Payload::new();
/// payload.insert("prompt".to_string(), json!("Hello"));
///
/// let token = Token::new("valid-token");
/// let response = gateway.handle_request("/api/v1/work", &token, &payload);
/// assert_eq!(response, Response::Ok("LLM Response for 'Hello'".to_string()));
///
/// let token = Token::new("bad-token");
/// let response = gateway.handle_request("/api/v1/work", &token, &Payload::new());
/// assert_eq!(response, Response::Unauthorized);
/// ```
#[derive(Debug, Clone)]
pub struct Gateway<A = StaticTokenAuthenticator, B = LlmBackend> {
    config: GatewayConfig,
    auth: A,
    backend: B,
}

impl Gateway {
    /// Wires the stub authenticator and backend with the default config.
    pub fn with_defaults() -> Self {
        Self::from_config(GatewayConfig::default())
    }

    /// Wires the stub authenticator and backend from `config`.
    pub fn from_config(config: GatewayConfig) -> Self {
        let auth = StaticTokenAuthenticator::new(config.credential().clone());
        let backend = LlmBackend::new(config.privileged_role());
        Self::new(config, auth, backend)
    }
}

impl<A: Authenticator, B: Backend> Gateway<A, B> {
    /// Creates a gateway over the given collaborators.
    pub fn new(config: GatewayConfig, auth: A, backend: B) -> Self {
        Self {
            config,
            auth,
            backend,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Handles a request given as its parts.
    pub fn handle_request(&self, path: &str, token: &Token, payload: &Payload) -> Response {
        let span = tracing::info_span!("gateway.request", path = %path);
        let _enter = span.enter();

        let exchange = Exchange::new(path, payload);
        let identity = self.auth.verify(token);

        let routing = match exchange.authenticate(identity) {
            Ok(routing) => routing,
            Err(response) => {
                tracing::warn!(
                    token = %token,
                    status = response.status_code(),
                    "authentication failed"
                );
                return response;
            }
        };

        let response = if routing.path() == self.config.work_route() {
            routing.dispatch(&self.backend)
        } else {
            routing.log().debug(format_args!("no route for path"));
            Response::NotFound
        };

        routing.log().info(format_args!(
            "request handled role={} outcome={} status={}",
            routing.role(),
            response.outcome(),
            response.status_code()
        ));
        response
    }

    /// Handles an owned request.
    pub fn handle(&self, request: Request) -> Response {
        self.handle_request(request.path(), request.token(), request.payload())
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::with_defaults()
    }
}
