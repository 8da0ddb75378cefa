//! Client harnesses.
//!
//! [`GatewayClient`] knows only the gateway. [`DirectClient`] wires the
//! authenticator and the backend itself and has to hand the resolved role
//! from one to the other; it exists to show the coupling the gateway removes.

use crate::auth::{Authenticator, StaticTokenAuthenticator};
use crate::backend::{Backend, Completion, LlmBackend};
use crate::config::{PROMPT_FIELD, WORK_ROUTE};
use crate::gateway::Gateway;
use crate::request::Request;
use crate::response::Response;
use crate::token::Token;

/// A client that goes through the gateway.
///
/// # Examples
///
/// ```
/// use gateway_patterns::{Gateway, GatewayClient, Response};
///
/// let gateway = Gateway::with_defaults();
/// let client = GatewayClient::new(&gateway);
///
/// assert_eq!(
///     client.do_work("valid-token", "Hello World"),
///     Response::Ok("LLM Response for 'Hello World'".to_string())
/// );
/// ```
#[derive(Debug)]
pub struct GatewayClient<'g, A = StaticTokenAuthenticator, B = LlmBackend> {
    gateway: &'g Gateway<A, B>,
}

impl<'g, A: Authenticator, B: Backend> GatewayClient<'g, A, B> {
    /// Creates a client bound to `gateway`.
    pub fn new(gateway: &'g Gateway<A, B>) -> Self {
        Self { gateway }
    }

    /// Sends one request to the work route. No retries.
    pub fn do_work(&self, token: impl Into<Token>, prompt: &str) -> Response {
        tracing::info!("[client with gateway] starting work");

        let route = self.gateway.config().work_route().to_string();
        let request = Request::new(route, token).with_field(PROMPT_FIELD, prompt);
        let response = self.gateway.handle(request);

        tracing::info!(
            status = response.status_code(),
            result = %response,
            "[client with gateway] done"
        );
        response
    }
}

/// A client that calls the authenticator and the backend itself.
#[derive(Debug, Clone, Default)]
pub struct DirectClient<A = StaticTokenAuthenticator, B = LlmBackend> {
    auth: A,
    backend: B,
}

impl<A: Authenticator, B: Backend> DirectClient<A, B> {
    /// Creates a client that owns both services.
    pub fn new(auth: A, backend: B) -> Self {
        Self { auth, backend }
    }

    /// Authenticates, then forwards the role to the backend by hand.
    pub fn do_work(&self, token: impl Into<Token>, prompt: &str) -> Response {
        tracing::info!(route = WORK_ROUTE, "[client direct] starting work");

        let identity = self.auth.verify(&token.into());
        let Some(role) = identity.role().filter(|_| identity.is_valid()) else {
            tracing::warn!("[client direct] auth failed");
            return Response::Unauthorized;
        };

        let response = match self.backend.execute(role, prompt) {
            Completion::Generated(text) => Response::Ok(text),
            Completion::Forbidden(message) => Response::Forbidden(message),
        };

        tracing::info!(status = response.status_code(), result = %response, "[client direct] done");
        response
    }
}
