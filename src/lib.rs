//! Request-routing facade with centralized authentication and role-gated
//! backend calls.
//!
//! Clients talk to a single [`Gateway`]. The gateway verifies the caller's
//! [`Token`], routes on the path, and forwards the resolved role to the
//! [`Backend`]. Every outcome, failures included, comes back as a
//! [`Response`] value.
//!
//! # Core Types
//!
//! - [`Token`]: opaque credential, redacted in Debug/Display
//! - [`Identity`]: result of token verification
//! - [`Authenticator`] / [`StaticTokenAuthenticator`]: token → identity
//! - [`Backend`] / [`LlmBackend`]: the privileged operation, re-checks the role
//! - [`Exchange`]: one request's lifecycle, typed by [`AwaitingAuth`] / [`Routing`]
//! - [`Gateway`]: the facade
//! - [`GatewayClient`] / [`DirectClient`]: client harnesses
//!
//! Collaborator patterns live in [`notify`] (dependency injection),
//! [`repository`] (repository over an in-memory table) and [`enforcer`]
//! (one shared, expensive-to-build policy enforcer).
//!
//! # Examples
//!
//! ```
//! use gateway_patterns::{Gateway, Request, Response};
//!
//! let gateway = Gateway::with_defaults();
//!
//! let request = Request::new("/api/v1/work", "valid-token").with_field("prompt", "Hello");
//! let ok = gateway.handle(request);
//! assert_eq!(ok, Response::Ok("LLM Response for 'Hello'".to_string()));
//!
//! let denied = gateway.handle(Request::new("/api/v1/work", "bad-token"));
//! assert_eq!(denied, Response::Unauthorized);
//!
//! let missing = gateway.handle(Request::new("/unknown", "valid-token"));
//! assert_eq!(missing, Response::NotFound);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod auth;
mod backend;
mod client;
mod config;
pub mod enforcer;
mod error;
mod exchange;
mod gateway;
mod identity;
mod logging;
pub mod notify;
pub mod repository;
mod request;
mod response;
mod state;
mod token;

#[cfg(test)]
pub(crate) mod test_utils;

pub use auth::{Authenticator, StaticTokenAuthenticator};
pub use backend::{Backend, Completion, LlmBackend, FORBIDDEN_MESSAGE};
pub use client::{DirectClient, GatewayClient};
pub use config::{
    Credential, GatewayConfig, GatewayConfigBuilder, ADMIN_ROLE, DEFAULT_USER, PROMPT_FIELD,
    VALID_TOKEN, WORK_ROUTE,
};
pub use error::{ConfigError, Error, RepoError};
pub use exchange::Exchange;
pub use gateway::Gateway;
pub use identity::Identity;
pub use logging::RouteLog;
pub use request::{Payload, Request};
pub use response::Response;
pub use state::{AwaitingAuth, Routing};
pub use token::Token;
