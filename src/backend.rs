use std::fmt;

use crate::config::ADMIN_ROLE;

/// Message returned by the backend when the caller's role is insufficient.
pub const FORBIDDEN_MESSAGE: &str = "Error: 403 Forbidden";

/// Outcome of a backend call.
///
/// The backend rejects by value, never by panicking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The operation ran and produced text
    Generated(String),
    /// The role check failed; carries the backend's message
    Forbidden(String),
}

impl Completion {
    /// Returns the raw string the backend produced.
    pub fn as_str(&self) -> &str {
        match self {
            Completion::Generated(text) | Completion::Forbidden(text) => text,
        }
    }

    /// Returns `true` if the role check failed.
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Completion::Forbidden(_))
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A privileged downstream operation gated on a role.
///
/// Implementations re-check the role on every call even when the caller
/// already authorized the request.
pub trait Backend {
    /// Runs the operation for `prompt` on behalf of `role`.
    fn execute(&self, role: &str, prompt: &str) -> Completion;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn execute(&self, role: &str, prompt: &str) -> Completion {
        (**self).execute(role, prompt)
    }
}

/// Stub text-generation backend.
///
/// # Examples
///
/// ```
/// use gateway_patterns::{Backend, Completion, LlmBackend};
///
/// let llm = LlmBackend::default();
///
/// assert_eq!(
///     llm.execute("admin", "Hello"),
///     Completion::Generated("LLM Response for 'Hello'".to_string())
/// );
/// assert_eq!(llm.execute("guest", "Hello").as_str(), "Error: 403 Forbidden");
/// ```
#[derive(Debug, Clone)]
pub struct LlmBackend {
    required_role: String,
}

impl LlmBackend {
    /// Creates a backend that only serves `required_role`.
    pub fn new(required_role: impl Into<String>) -> Self {
        Self {
            required_role: required_role.into(),
        }
    }

    /// Role this backend serves.
    pub fn required_role(&self) -> &str {
        &self.required_role
    }
}

impl Default for LlmBackend {
    fn default() -> Self {
        Self::new(ADMIN_ROLE)
    }
}

impl Backend for LlmBackend {
    fn execute(&self, role: &str, prompt: &str) -> Completion {
        if role != self.required_role {
            tracing::warn!(role, required = %self.required_role, "backend rejected role");
            return Completion::Forbidden(FORBIDDEN_MESSAGE.to_string());
        }
        Completion::Generated(format!("LLM Response for '{}'", prompt))
    }
}
