use std::borrow::Cow;
use std::marker::PhantomData;

use serde_json::Value;

use crate::backend::{Backend, Completion};
use crate::config::PROMPT_FIELD;
use crate::identity::Identity;
use crate::logging::RouteLog;
use crate::request::Payload;
use crate::response::Response;
use crate::state::{AwaitingAuth, Routing};

/// One request moving through the gateway.
///
/// `Exchange<S>` is generic over its lifecycle state:
/// - `Exchange<AwaitingAuth>`: token not yet verified, cannot reach the backend
/// - `Exchange<Routing>`: identity verified, may dispatch to the backend
///
/// ```text
/// Exchange<AwaitingAuth> --authenticate(valid identity)--> Exchange<Routing>
///                        --authenticate(invalid)---------> Response::Unauthorized
/// ```
///
/// Exchanges borrow the request's path and payload and live for a single
/// gateway call. They are created only inside the crate.
#[derive(Debug)]
pub struct Exchange<'r, S = Routing> {
    path: &'r str,
    payload: &'r Payload,
    user: String,
    role: String,
    _state: PhantomData<S>,
}

impl<'r, S> Exchange<'r, S> {
    /// Requested path.
    pub fn path(&self) -> &str {
        self.path
    }

    /// Request body.
    pub fn payload(&self) -> &Payload {
        self.payload
    }
}

impl<'r> Exchange<'r, AwaitingAuth> {
    pub(crate) fn new(path: &'r str, payload: &'r Payload) -> Self {
        Self {
            path,
            payload,
            user: String::new(),
            role: String::new(),
            _state: PhantomData,
        }
    }

    /// Moves to [`Routing`] if `identity` is valid.
    ///
    /// # Errors
    ///
    /// Returns [`Response::Unauthorized`] for an invalid identity, or for a
    /// valid one that carries no user or role.
    pub fn authenticate(self, identity: Identity) -> Result<Exchange<'r, Routing>, Response> {
        if !identity.is_valid() {
            return Err(Response::Unauthorized);
        }
        let (Some(user), Some(role)) = (identity.user(), identity.role()) else {
            return Err(Response::Unauthorized);
        };

        Ok(Exchange {
            path: self.path,
            payload: self.payload,
            user: user.to_string(),
            role: role.to_string(),
            _state: PhantomData,
        })
    }
}

impl<'r> Exchange<'r, Routing> {
    /// Authenticated user.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Role forwarded to the backend.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns a logger tagged with this exchange's path and user.
    pub fn log(&self) -> RouteLog<'_> {
        RouteLog::new(self.path, &self.user)
    }

    /// Reads the prompt from the payload.
    ///
    /// Strings are used verbatim; any other JSON value is rendered as JSON
    /// text.
    ///
    /// # Errors
    ///
    /// Returns [`Response::MissingField`] when the payload has no prompt.
    pub fn prompt(&self) -> Result<Cow<'r, str>, Response> {
        match self.payload.get(PROMPT_FIELD) {
            Some(Value::String(text)) => Ok(Cow::Borrowed(text.as_str())),
            Some(other) => Ok(Cow::Owned(other.to_string())),
            None => Err(Response::MissingField(PROMPT_FIELD)),
        }
    }

    /// Runs the backend with this exchange's role and prompt.
    pub fn dispatch<B: Backend + ?Sized>(&self, backend: &B) -> Response {
        let prompt = match self.prompt() {
            Ok(prompt) => prompt,
            Err(response) => {
                self.log()
                    .warn(format_args!("payload has no '{}' field", PROMPT_FIELD));
                return response;
            }
        };

        self.log()
            .debug(format_args!("dispatching with role '{}'", self.role));

        match backend.execute(&self.role, &prompt) {
            Completion::Generated(text) => Response::Ok(text),
            Completion::Forbidden(message) => {
                self.log()
                    .warn(format_args!("backend refused role '{}'", self.role));
                Response::Forbidden(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{LlmBackend, FORBIDDEN_MESSAGE};
    use serde_json::json;

    fn payload_with_prompt(value: Value) -> Payload {
        let mut payload = Payload::new();
        payload.insert(PROMPT_FIELD.to_string(), value);
        payload
    }

    #[test]
    fn invalid_identity_stays_unauthorized() {
        let payload = Payload::new();
        let exchange = Exchange::new("/api/v1/work", &payload);

        let result = exchange.authenticate(Identity::invalid());
        assert_eq!(result.unwrap_err(), Response::Unauthorized);
    }

    #[test]
    fn valid_identity_moves_to_routing() {
        let payload = Payload::new();
        let exchange = Exchange::new("/api/v1/work", &payload);

        let routing = exchange
            .authenticate(Identity::verified("Alice", "admin"))
            .expect("valid identity");

        assert_eq!(routing.path(), "/api/v1/work");
        assert_eq!(routing.user(), "Alice");
        assert_eq!(routing.role(), "admin");
        assert_eq!(routing.log().path(), "/api/v1/work");
    }

    #[test]
    fn string_prompt_is_borrowed_verbatim() {
        let payload = payload_with_prompt(json!("Hello"));
        let routing = Exchange::new("/", &payload)
            .authenticate(Identity::verified("Alice", "admin"))
            .unwrap();

        let prompt = routing.prompt().unwrap();
        assert!(matches!(prompt, Cow::Borrowed("Hello")));
    }

    #[test]
    fn non_string_prompt_is_rendered_as_json() {
        let payload = payload_with_prompt(json!({"n": 1}));
        let routing = Exchange::new("/", &payload)
            .authenticate(Identity::verified("Alice", "admin"))
            .unwrap();

        assert_eq!(routing.prompt().unwrap(), r#"{"n":1}"#);
    }

    #[test]
    fn dispatch_without_prompt_reports_missing_field() {
        let payload = Payload::new();
        let routing = Exchange::new("/", &payload)
            .authenticate(Identity::verified("Alice", "admin"))
            .unwrap();

        assert_eq!(
            routing.dispatch(&LlmBackend::default()),
            Response::MissingField("prompt")
        );
    }

    #[test]
    fn dispatch_maps_completions() {
        let payload = payload_with_prompt(json!("Hi"));
        let backend = LlmBackend::default();

        let admin = Exchange::new("/", &payload)
            .authenticate(Identity::verified("Alice", "admin"))
            .unwrap();
        assert_eq!(
            admin.dispatch(&backend),
            Response::Ok("LLM Response for 'Hi'".to_string())
        );

        let guest = Exchange::new("/", &payload)
            .authenticate(Identity::verified("Bob", "guest"))
            .unwrap();
        assert_eq!(
            guest.dispatch(&backend),
            Response::Forbidden(FORBIDDEN_MESSAGE.to_string())
        );
    }
}
