use std::fmt;

/// The outcome of one gateway call.
///
/// Every failure is a variant of this enum; the gateway never panics and
/// never returns `Err`. Callers inspect the value.
///
/// # Examples
///
/// ```
/// use gateway_patterns::Response;
///
/// assert_eq!(Response::Unauthorized.to_string(), "401 Unauthorized");
/// assert_eq!(Response::NotFound.status_code(), 404);
/// assert_eq!(Response::Ok("done".to_string()).body(), Some("done"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The backend produced a result
    Ok(String),
    /// The token was not accepted
    Unauthorized,
    /// No route matches the path
    NotFound,
    /// The identity was valid but the backend refused its role
    Forbidden(String),
    /// The payload lacks a field the route requires
    MissingField(&'static str),
}

impl Response {
    /// HTTP-style status code for the outcome.
    pub fn status_code(&self) -> u16 {
        match self {
            Response::Ok(_) => 200,
            Response::MissingField(_) => 400,
            Response::Unauthorized => 401,
            Response::Forbidden(_) => 403,
            Response::NotFound => 404,
        }
    }

    /// Returns `true` for [`Response::Ok`].
    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok(_))
    }

    /// Returns the body of a successful response.
    pub fn body(&self) -> Option<&str> {
        match self {
            Response::Ok(body) => Some(body),
            _ => None,
        }
    }

    /// Short label used in log fields.
    pub fn outcome(&self) -> &'static str {
        match self {
            Response::Ok(_) => "ok",
            Response::Unauthorized => "unauthorized",
            Response::NotFound => "not_found",
            Response::Forbidden(_) => "forbidden",
            Response::MissingField(_) => "missing_field",
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Response::Ok(body) => f.write_str(body),
            Response::Unauthorized => f.write_str("401 Unauthorized"),
            Response::NotFound => f.write_str("404 Not Found"),
            Response::Forbidden(message) => f.write_str(message),
            Response::MissingField(field) => {
                write!(f, "400 Bad Request: missing field '{}'", field)
            }
        }
    }
}
