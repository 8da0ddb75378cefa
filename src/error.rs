use std::fmt;

/// Errors raised by the crate's collaborators.
///
/// Request outcomes are never errors: the gateway reports them as
/// [`Response`](crate::Response) values.
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Gateway configuration was rejected
    Config(ConfigError),
    /// A repository operation failed
    Repository(RepoError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "configuration error: {}", e),
            Error::Repository(e) => write!(f, "repository error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Config(e) => Some(e),
            Error::Repository(e) => Some(e),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<RepoError> for Error {
    fn from(e: RepoError) -> Self {
        Error::Repository(e)
    }
}

/// Reasons a [`GatewayConfig`](crate::GatewayConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required field is blank
    EmptyField(&'static str),
    /// The work route is not an absolute path
    InvalidRoute(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyField(name) => write!(f, "field '{}' must not be empty", name),
            ConfigError::InvalidRoute(route) => {
                write!(f, "route '{}' must start with '/'", route)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failures at the repository boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A domain entity could not be mapped to a storage row
    Encode(String),
    /// A storage row could not be mapped back to a domain entity
    Decode(String),
    /// The entity violates a business rule
    Invalid(&'static str),
}

impl fmt::Display for RepoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoError::Encode(msg) => write!(f, "cannot encode row: {}", msg),
            RepoError::Decode(msg) => write!(f, "cannot decode row: {}", msg),
            RepoError::Invalid(reason) => write!(f, "invalid entity: {}", reason),
        }
    }
}

impl std::error::Error for RepoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::InvalidRoute("work".to_string());
        assert_eq!(err.to_string(), "route 'work' must start with '/'");

        let err = ConfigError::EmptyField("privileged_role");
        assert_eq!(err.to_string(), "field 'privileged_role' must not be empty");
    }

    #[test]
    fn umbrella_error_wraps_sources() {
        let err: Error = RepoError::Invalid("username is required").into();
        assert_eq!(
            err.to_string(),
            "repository error: invalid entity: username is required"
        );
        assert!(std::error::Error::source(&err).is_some());

        let err: Error = ConfigError::EmptyField("credential.user").into();
        assert!(matches!(err, Error::Config(_)));
    }
}
