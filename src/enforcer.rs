//! Authorization-policy enforcer that is expensive to build.
//!
//! The enforcer is built once and shared: an [`EnforcerCell`] owned by the
//! application builds it on first use and hands out `Arc` handles, which
//! consumers such as [`AuthControl`] receive through their constructors.
//! There is no process-global instance.
//!
//! [`PerCallAuthControl`] pays the build cost on every check and exists for
//! comparison.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Duration;

/// Rule field value that matches anything.
pub const WILDCARD: &str = "*";

/// One allow rule: subject may perform action on resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRule {
    /// Who the rule applies to
    pub subject: String,
    /// What is being accessed
    pub resource: String,
    /// What is being done
    pub action: String,
}

impl PolicyRule {
    /// Creates a rule. Any field may be [`WILDCARD`].
    pub fn new(
        subject: impl Into<String>,
        resource: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            resource: resource.into(),
            action: action.into(),
        }
    }

    fn matches(&self, subject: &str, resource: &str, action: &str) -> bool {
        field_matches(&self.subject, subject)
            && field_matches(&self.resource, resource)
            && field_matches(&self.action, action)
    }
}

fn field_matches(rule: &str, value: &str) -> bool {
    rule == WILDCARD || rule == value
}

/// An allow-list enforcer.
#[derive(Debug)]
pub struct PolicyEnforcer {
    rules: Vec<PolicyRule>,
}

impl PolicyEnforcer {
    /// Builds an enforcer, blocking for `build_cost` to model loading a
    /// policy model.
    pub fn build(rules: Vec<PolicyRule>, build_cost: Duration) -> Self {
        if !build_cost.is_zero() {
            thread::sleep(build_cost);
        }
        tracing::info!(rules = rules.len(), ?build_cost, "created an enforcer");
        Self { rules }
    }

    /// Returns `true` if some rule allows the request.
    pub fn enforce(&self, subject: &str, resource: &str, action: &str) -> bool {
        let allowed = self
            .rules
            .iter()
            .any(|rule| rule.matches(subject, resource, action));
        tracing::debug!(subject, resource, action, allowed, "enforced");
        allowed
    }

    /// Loaded rules.
    pub fn rules(&self) -> &[PolicyRule] {
        &self.rules
    }
}

/// Builds a [`PolicyEnforcer`] at most once and shares it.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
/// use gateway_patterns::enforcer::{EnforcerCell, PolicyRule};
///
/// let cell = EnforcerCell::new(vec![PolicyRule::new("alice", "data", "read")], Duration::ZERO);
///
/// let first = cell.get();
/// let second = cell.get();
///
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(cell.constructions(), 1);
/// assert!(first.enforce("alice", "data", "read"));
/// ```
#[derive(Debug)]
pub struct EnforcerCell {
    rules: Vec<PolicyRule>,
    build_cost: Duration,
    instance: OnceLock<Arc<PolicyEnforcer>>,
    constructions: AtomicUsize,
}

impl EnforcerCell {
    /// Creates an empty cell holding the build recipe.
    pub fn new(rules: Vec<PolicyRule>, build_cost: Duration) -> Self {
        Self {
            rules,
            build_cost,
            instance: OnceLock::new(),
            constructions: AtomicUsize::new(0),
        }
    }

    /// Creates a cell and builds the enforcer right away.
    pub fn eager(rules: Vec<PolicyRule>, build_cost: Duration) -> Self {
        let cell = Self::new(rules, build_cost);
        cell.get();
        cell
    }

    /// Returns the shared enforcer, building it on first use.
    pub fn get(&self) -> Arc<PolicyEnforcer> {
        Arc::clone(self.instance.get_or_init(|| {
            self.constructions.fetch_add(1, Ordering::SeqCst);
            Arc::new(PolicyEnforcer::build(self.rules.clone(), self.build_cost))
        }))
    }

    /// Returns true once the enforcer exists.
    pub fn is_initialized(&self) -> bool {
        self.instance.get().is_some()
    }

    /// How many times the enforcer was built. Never more than one.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

/// Permission checks against an injected, shared enforcer.
#[derive(Debug, Clone)]
pub struct AuthControl {
    enforcer: Arc<PolicyEnforcer>,
}

impl AuthControl {
    /// Creates a checker over `enforcer`.
    pub fn new(enforcer: Arc<PolicyEnforcer>) -> Self {
        Self { enforcer }
    }

    /// Checks whether `subject` may perform `action` on `resource`.
    pub fn check_permission(&self, subject: &str, resource: &str, action: &str) -> bool {
        self.enforcer.enforce(subject, resource, action)
    }
}

/// Permission checks that build a fresh enforcer every time.
#[derive(Debug, Clone)]
pub struct PerCallAuthControl {
    rules: Vec<PolicyRule>,
    build_cost: Duration,
}

impl PerCallAuthControl {
    /// Creates a checker with the enforcer recipe.
    pub fn new(rules: Vec<PolicyRule>, build_cost: Duration) -> Self {
        Self { rules, build_cost }
    }

    /// Builds an enforcer, then checks.
    pub fn check_permission(&self, subject: &str, resource: &str, action: &str) -> bool {
        let enforcer = PolicyEnforcer::build(self.rules.clone(), self.build_cost);
        enforcer.enforce(subject, resource, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn rules() -> Vec<PolicyRule> {
        vec![
            PolicyRule::new("alice", "data", "read"),
            PolicyRule::new("admin", WILDCARD, WILDCARD),
        ]
    }

    #[test]
    fn enforce_matches_exact_rules() {
        let enforcer = PolicyEnforcer::build(rules(), Duration::ZERO);

        assert!(enforcer.enforce("alice", "data", "read"));
        assert!(!enforcer.enforce("alice", "data", "write"));
        assert!(!enforcer.enforce("bob", "data", "read"));
    }

    #[test]
    fn wildcard_matches_anything() {
        let enforcer = PolicyEnforcer::build(rules(), Duration::ZERO);

        assert!(enforcer.enforce("admin", "secrets", "delete"));
        assert_eq!(enforcer.rules().len(), 2);
    }

    #[test]
    fn cell_is_lazy() {
        let cell = EnforcerCell::new(rules(), Duration::ZERO);

        assert!(!cell.is_initialized());
        assert_eq!(cell.constructions(), 0);

        cell.get();
        assert!(cell.is_initialized());
        assert_eq!(cell.constructions(), 1);
    }

    #[test]
    fn eager_cell_builds_up_front() {
        let cell = EnforcerCell::eager(rules(), Duration::ZERO);
        assert!(cell.is_initialized());
        assert_eq!(cell.constructions(), 1);
    }

    #[test]
    fn second_get_skips_construction() {
        let cell = EnforcerCell::new(rules(), Duration::from_millis(50));

        let started = Instant::now();
        let first = cell.get();
        let first_elapsed = started.elapsed();

        let started = Instant::now();
        let second = cell.get();
        let second_elapsed = started.elapsed();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(first_elapsed >= Duration::from_millis(50));
        assert!(second_elapsed < Duration::from_millis(50));
        assert_eq!(cell.constructions(), 1);
    }

    #[test]
    fn concurrent_gets_build_once() {
        let cell = EnforcerCell::new(rules(), Duration::from_millis(10));

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    assert!(cell.get().enforce("alice", "data", "read"));
                });
            }
        });

        assert_eq!(cell.constructions(), 1);
    }

    #[test]
    fn auth_controls_agree() {
        let cell = EnforcerCell::new(rules(), Duration::ZERO);
        let shared = AuthControl::new(cell.get());
        let per_call = PerCallAuthControl::new(rules(), Duration::ZERO);

        for (subject, resource, action) in [
            ("alice", "data", "read"),
            ("alice", "data", "write"),
            ("admin", "x", "y"),
        ] {
            assert_eq!(
                shared.check_permission(subject, resource, action),
                per_call.check_permission(subject, resource, action)
            );
        }
        assert_eq!(cell.constructions(), 1);
    }
}
