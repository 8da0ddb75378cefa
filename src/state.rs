//! Type-state markers for the request lifecycle.
//!
//! An [`Exchange`](crate::exchange::Exchange) starts in [`AwaitingAuth`] and
//! moves to [`Routing`] only when its token resolves to a valid identity.

/// Marker for an exchange whose token has not been verified.
///
/// `Exchange<AwaitingAuth>` cannot reach the backend.
#[derive(Debug, Clone, Copy)]
pub struct AwaitingAuth {
    _private: (),
}

impl AwaitingAuth {
    #[allow(dead_code)] // Used in tests
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// Marker for an exchange holding a verified identity.
///
/// Only `Exchange<Routing>` can dispatch to the backend.
#[derive(Debug, Clone, Copy)]
pub struct Routing {
    _private: (),
}

impl Routing {
    #[allow(dead_code)] // Used in tests
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}
