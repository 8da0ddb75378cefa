use std::fmt;

/// An opaque bearer token presented by a client.
///
/// The core never looks inside a token; it only compares it against the
/// credential an [`Authenticator`](crate::Authenticator) knows about.
///
/// # Security Properties
///
/// - Debug and Display output is always `[REDACTED]`
/// - No `Deref`, `AsRef` or `Borrow`: the raw value is reachable only
///   through [`expose`](Self::expose)
///
/// # Examples
///
/// ```
/// use gateway_patterns::Token;
///
/// let token = Token::new("valid-token");
///
/// assert_eq!(format!("{:?}", token), "[REDACTED]");
/// assert_eq!(format!("{}", token), "[REDACTED]");
/// assert_eq!(token.expose(), "valid-token");
/// ```
// Do NOT derive Debug or implement Display in a way that prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    inner: String,
}

impl Token {
    /// Wraps a raw token string.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Returns the raw token.
    ///
    /// Intended for authenticators only. Never log the returned value.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Compares the token against an expected raw value.
    pub fn matches(&self, expected: &str) -> bool {
        self.inner == expected
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
