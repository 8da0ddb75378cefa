use std::fmt;

/// Logger bound to one routed exchange.
///
/// `RouteLog` is obtained from [`Exchange::log`](crate::Exchange::log) and
/// cannot outlive it. Every event carries the routed path and the
/// authenticated user so log lines from one request correlate without a
/// shared request counter.
#[derive(Debug)]
pub struct RouteLog<'a> {
    path: &'a str,
    user: &'a str,
}

impl<'a> RouteLog<'a> {
    pub(crate) fn new(path: &'a str, user: &'a str) -> Self {
        Self { path, user }
    }

    /// Path of the exchange this logger belongs to.
    pub fn path(&self) -> &str {
        self.path
    }

    /// Logs an info-level message.
    ///
    /// ```no_run
    /// # use gateway_patterns::RouteLog;
    /// # fn example(log: &RouteLog) {
    /// log.info(format_args!("dispatching to {}", "llm"));
    /// # }
    /// ```
    pub fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(path = %self.path, user = %self.user, "{}", args);
    }

    /// Logs a warning-level message.
    pub fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(path = %self.path, user = %self.user, "{}", args);
    }

    /// Logs a debug-level message.
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(path = %self.path, user = %self.user, "{}", args);
    }
}
