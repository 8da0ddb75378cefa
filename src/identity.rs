/// The result of verifying a [`Token`](crate::Token).
///
/// An identity is produced only by an [`Authenticator`](crate::Authenticator)
/// and is immutable once returned. Invalid identities never carry a user or
/// a role.
///
/// # Examples
///
/// ```
/// use gateway_patterns::Identity;
///
/// let alice = Identity::verified("Alice", "admin");
/// assert!(alice.is_valid());
/// assert_eq!(alice.role(), Some("admin"));
///
/// let nobody = Identity::invalid();
/// assert!(!nobody.is_valid());
/// assert!(nobody.user().is_none());
/// assert!(nobody.role().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    is_valid: bool,
    user: Option<String>,
    role: Option<String>,
}

impl Identity {
    /// Creates a valid identity for `user` acting with `role`.
    pub fn verified(user: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            user: Some(user.into()),
            role: Some(role.into()),
        }
    }

    /// Creates an invalid identity. It carries no user and no role.
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            user: None,
            role: None,
        }
    }

    /// Returns `true` if the token was accepted.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the user name, if the identity is valid.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the role, if the identity is valid.
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}
