//! Notification capability and a controller that receives it by injection.
//!
//! [`UserController`] asks for any [`Notifier`] in its constructor, so a
//! test can hand it a [`RecordingNotifier`] while production hands it an
//! [`SmtpNotifier`]. [`HardwiredUserController`] builds its own
//! `SmtpNotifier` and cannot be tested without "sending" mail.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Capability to deliver a message.
pub trait Notifier {
    /// Delivers `message`.
    fn send(&self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn send(&self, message: &str) {
        (**self).send(message)
    }
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn send(&self, message: &str) {
        (**self).send(message)
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn send(&self, message: &str) {
        (**self).send(message)
    }
}

/// The production notifier. Stands in for an SMTP client.
#[derive(Debug, Clone, Default)]
pub struct SmtpNotifier;

impl Notifier for SmtpNotifier {
    fn send(&self, message: &str) {
        tracing::info!("[Real Email] Sending to SMTP server: {}", message);
    }
}

/// A notifier that records messages instead of delivering them.
///
/// # Examples
///
/// ```
/// use gateway_patterns::notify::{Notifier, RecordingNotifier};
///
/// let notifier = RecordingNotifier::new();
/// notifier.send("hello");
///
/// assert_eq!(notifier.messages(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the recorded messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Number of recorded messages.
    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    /// Returns true if nothing was sent.
    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn send(&self, message: &str) {
        tracing::debug!(message, "[Mock Email] Pretending to send");
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Registers users and welcomes them through an injected notifier.
///
/// # Examples
///
/// ```
/// use gateway_patterns::notify::{RecordingNotifier, UserController};
///
/// let notifier = RecordingNotifier::new();
/// let controller = UserController::new(&notifier);
///
/// controller.register("Charlie");
/// assert_eq!(notifier.messages(), vec!["Welcome Charlie!".to_string()]);
/// ```
#[derive(Debug)]
pub struct UserController<N> {
    notifier: N,
}

impl<N: Notifier> UserController<N> {
    /// Creates a controller using `notifier`.
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Registers `username` and sends the welcome message.
    pub fn register(&self, username: &str) {
        tracing::info!(username, "registering");
        self.notifier.send(&welcome_message(username));
    }
}

/// Registers users with a notifier it constructs itself.
#[derive(Debug)]
pub struct HardwiredUserController {
    notifier: SmtpNotifier,
}

impl HardwiredUserController {
    /// Creates the controller and its own [`SmtpNotifier`].
    pub fn new() -> Self {
        Self {
            notifier: SmtpNotifier,
        }
    }

    /// Registers `username` and sends the welcome message.
    pub fn register(&self, username: &str) {
        tracing::info!(username, "registering");
        self.notifier.send(&welcome_message(username));
    }
}

impl Default for HardwiredUserController {
    fn default() -> Self {
        Self::new()
    }
}

fn welcome_message(username: &str) -> String {
    format!("Welcome {}!", username)
}
