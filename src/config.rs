//! Gateway configuration.
//!
//! Defaults reproduce the canonical setup: one known-good token that
//! resolves to `Alice` acting as `admin`, and a single work route.

use crate::error::ConfigError;

/// The only token the default authenticator accepts.
pub const VALID_TOKEN: &str = "valid-token";

/// User name resolved for [`VALID_TOKEN`].
pub const DEFAULT_USER: &str = "Alice";

/// Role resolved for [`VALID_TOKEN`], and the role the backend requires.
pub const ADMIN_ROLE: &str = "admin";

/// The single route the gateway dispatches to the backend.
pub const WORK_ROUTE: &str = "/api/v1/work";

/// Payload key the work route reads the prompt from.
pub const PROMPT_FIELD: &str = "prompt";

/// A token together with the identity it resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    /// Raw token value clients must present.
    pub token: String,
    /// User name the token resolves to.
    pub user: String,
    /// Role the token resolves to.
    pub role: String,
}

impl Credential {
    /// Creates a credential.
    pub fn new(
        token: impl Into<String>,
        user: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            user: user.into(),
            role: role.into(),
        }
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::new(VALID_TOKEN, DEFAULT_USER, ADMIN_ROLE)
    }
}

/// Validated gateway configuration.
///
/// # Examples
///
/// ```
/// use gateway_patterns::{Credential, GatewayConfig};
///
/// let config = GatewayConfig::builder()
///     .work_route("/api/v2/work")
///     .credential(Credential::new("t-1", "Bob", "admin"))
///     .build()
///     .expect("valid config");
///
/// assert_eq!(config.work_route(), "/api/v2/work");
/// assert_eq!(config.privileged_role(), "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    work_route: String,
    credential: Credential,
    privileged_role: String,
}

impl GatewayConfig {
    /// Starts a builder seeded with the defaults.
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Route dispatched to the backend.
    pub fn work_route(&self) -> &str {
        &self.work_route
    }

    /// The credential the default authenticator accepts.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Role the backend requires to run the privileged operation.
    pub fn privileged_role(&self) -> &str {
        &self.privileged_role
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] for blank fields and
    /// [`ConfigError::InvalidRoute`] when the route does not start with `/`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.work_route.starts_with('/') {
            return Err(ConfigError::InvalidRoute(self.work_route.clone()));
        }
        let fields = [
            ("credential.token", &self.credential.token),
            ("credential.user", &self.credential.user),
            ("credential.role", &self.credential.role),
            ("privileged_role", &self.privileged_role),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField(name));
            }
        }
        Ok(())
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            work_route: WORK_ROUTE.to_string(),
            credential: Credential::default(),
            privileged_role: ADMIN_ROLE.to_string(),
        }
    }
}

/// Builder for [`GatewayConfig`].
#[derive(Debug, Default)]
pub struct GatewayConfigBuilder {
    config: GatewayConfig,
}

impl GatewayConfigBuilder {
    /// Sets the work route.
    pub fn work_route(mut self, route: impl Into<String>) -> Self {
        self.config.work_route = route.into();
        self
    }

    /// Sets the accepted credential.
    pub fn credential(mut self, credential: Credential) -> Self {
        self.config.credential = credential;
        self
    }

    /// Sets the role the backend requires.
    pub fn privileged_role(mut self, role: impl Into<String>) -> Self {
        self.config.privileged_role = role.into();
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// See [`GatewayConfig::validate`].
    pub fn build(self) -> Result<GatewayConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_constants() {
        let config = GatewayConfig::default();

        assert_eq!(config.work_route(), WORK_ROUTE);
        assert_eq!(config.credential().token, VALID_TOKEN);
        assert_eq!(config.credential().user, DEFAULT_USER);
        assert_eq!(config.credential().role, ADMIN_ROLE);
        assert_eq!(config.privileged_role(), ADMIN_ROLE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = GatewayConfig::builder()
            .work_route("/jobs")
            .privileged_role("operator")
            .credential(Credential::new("tok", "Bob", "operator"))
            .build()
            .unwrap();

        assert_eq!(config.work_route(), "/jobs");
        assert_eq!(config.privileged_role(), "operator");
        assert_eq!(config.credential().user, "Bob");
    }

    #[test]
    fn route_without_leading_slash_is_rejected() {
        let result = GatewayConfig::builder().work_route("api/v1/work").build();

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidRoute("api/v1/work".to_string())
        );
    }

    #[test]
    fn blank_fields_are_rejected() {
        let result = GatewayConfig::builder()
            .credential(Credential::new("  ", "Alice", "admin"))
            .build();
        assert_eq!(
            result.unwrap_err(),
            ConfigError::EmptyField("credential.token")
        );

        let result = GatewayConfig::builder().privileged_role("").build();
        assert_eq!(result.unwrap_err(), ConfigError::EmptyField("privileged_role"));
    }
}
