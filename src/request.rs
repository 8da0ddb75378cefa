use serde_json::{Map, Value};

use crate::token::Token;

/// Request body: a JSON object keyed by field name.
pub type Payload = Map<String, Value>;

/// A request as the client hands it to the gateway.
///
/// Built by the client and consumed once by
/// [`Gateway::handle`](crate::Gateway::handle). The token is redacted in
/// `Debug` output.
///
/// # Examples
///
/// ```
/// use gateway_patterns::Request;
///
/// let request = Request::new("/api/v1/work", "valid-token").with_field("prompt", "Hello");
///
/// assert_eq!(request.path(), "/api/v1/work");
/// assert_eq!(request.payload()["prompt"], "Hello");
/// assert!(!format!("{:?}", request).contains("valid-token"));
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    path: String,
    token: Token,
    payload: Payload,
}

impl Request {
    /// Creates a request with an empty payload.
    pub fn new(path: impl Into<String>, token: impl Into<Token>) -> Self {
        Self {
            path: path.into(),
            token: token.into(),
            payload: Payload::new(),
        }
    }

    /// Replaces the payload.
    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }

    /// Adds one payload field, overwriting an existing key.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.payload.insert(key.into(), value.into());
        self
    }

    /// Requested path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Presented token.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Request body.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }
}
