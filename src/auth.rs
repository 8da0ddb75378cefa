use crate::config::Credential;
use crate::identity::Identity;
use crate::token::Token;

/// Resolves a [`Token`] into an [`Identity`].
///
/// Implementations must be total: every token maps to some identity, and an
/// unknown token maps to [`Identity::invalid`]. Verification never fails with
/// an error.
///
/// # Examples
///
/// ```
/// use gateway_patterns::{Authenticator, Identity, Token};
///
/// struct DenyAll;
///
/// impl Authenticator for DenyAll {
///     fn verify(&self, _token: &Token) -> Identity {
///         Identity::invalid()
///     }
/// }
///
/// assert!(!DenyAll.verify(&Token::new("anything")).is_valid());
/// ```
pub trait Authenticator {
    /// Verifies a token.
    fn verify(&self, token: &Token) -> Identity;
}

impl<A: Authenticator + ?Sized> Authenticator for &A {
    fn verify(&self, token: &Token) -> Identity {
        (**self).verify(token)
    }
}

/// An authenticator that knows exactly one credential.
///
/// # Examples
///
/// ```
/// use gateway_patterns::{Authenticator, StaticTokenAuthenticator, Token};
///
/// let auth = StaticTokenAuthenticator::default();
///
/// let identity = auth.verify(&Token::new("valid-token"));
/// assert_eq!(identity.user(), Some("Alice"));
/// assert_eq!(identity.role(), Some("admin"));
///
/// assert!(!auth.verify(&Token::new("bad-token")).is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTokenAuthenticator {
    credential: Credential,
}

impl StaticTokenAuthenticator {
    /// Creates an authenticator accepting only `credential`.
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }
}

impl Authenticator for StaticTokenAuthenticator {
    fn verify(&self, token: &Token) -> Identity {
        if token.matches(&self.credential.token) {
            tracing::debug!(user = %self.credential.user, "token accepted");
            Identity::verified(&self.credential.user, &self.credential.role)
        } else {
            tracing::debug!(token = %token, "token rejected");
            Identity::invalid()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ADMIN_ROLE, DEFAULT_USER, VALID_TOKEN};
    use crate::test_utils::{arb_invalid_token, capture_logs};
    use proptest::prelude::*;

    #[test]
    fn valid_marker_resolves_to_default_identity() {
        let auth = StaticTokenAuthenticator::default();
        let identity = auth.verify(&Token::new(VALID_TOKEN));

        assert_eq!(identity, Identity::verified(DEFAULT_USER, ADMIN_ROLE));
    }

    #[test]
    fn other_tokens_are_invalid() {
        let auth = StaticTokenAuthenticator::default();

        for raw in ["bad-token", "", "valid-token\n", "Bearer valid-token"] {
            assert_eq!(auth.verify(&Token::new(raw)), Identity::invalid());
        }
    }

    #[test]
    fn custom_credential_is_honoured() {
        let auth = StaticTokenAuthenticator::new(Credential::new("t-guest", "Guest", "viewer"));

        let identity = auth.verify(&Token::new("t-guest"));
        assert_eq!(identity.role(), Some("viewer"));
        assert!(!auth.verify(&Token::new(VALID_TOKEN)).is_valid());
    }

    #[test]
    fn references_are_authenticators() {
        fn verify_with(auth: impl Authenticator) -> bool {
            auth.verify(&Token::new(VALID_TOKEN)).is_valid()
        }

        let auth = StaticTokenAuthenticator::default();
        assert!(verify_with(&auth));
    }

    #[test]
    fn rejected_token_is_redacted_in_logs() {
        let auth = StaticTokenAuthenticator::default();

        let logs = capture_logs(|| {
            auth.verify(&Token::new("sk-leaky-1234"));
        });

        assert!(logs.contains("token rejected"));
        assert!(logs.contains("[REDACTED]"));
        assert!(!logs.contains("sk-leaky-1234"));
    }

    proptest! {
        /// Property: every token but the valid marker resolves to an invalid identity
        #[test]
        fn proptest_unknown_tokens_are_invalid(raw in arb_invalid_token()) {
            let identity = StaticTokenAuthenticator::default().verify(&Token::new(raw));
            prop_assert_eq!(identity, Identity::invalid());
        }
    }
}
