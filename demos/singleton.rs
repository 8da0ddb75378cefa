//! Shared enforcer demonstration.
//!
//! Three permission checks with an enforcer built per check, then three
//! with one enforcer built once and injected.
//!
//! Run with: `cargo run --example singleton`

use std::time::{Duration, Instant};

use gateway_patterns::enforcer::{AuthControl, EnforcerCell, PerCallAuthControl, PolicyRule};
use tracing_subscriber::EnvFilter;

const BUILD_COST: Duration = Duration::from_secs(3);

fn rules() -> Vec<PolicyRule> {
    vec![
        PolicyRule::new("alice", "data1", "read"),
        PolicyRule::new("bob", "data2", "write"),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Enforcer per check ===");
    let per_call = PerCallAuthControl::new(rules(), BUILD_COST);
    for i in 1..=3 {
        let started = Instant::now();
        let allowed = per_call.check_permission("alice", "data1", "read");
        println!("Request {}: allowed={} in {:.2?}", i, allowed, started.elapsed());
    }

    println!("\n=== Shared enforcer ===");
    let cell = EnforcerCell::new(rules(), BUILD_COST);
    for i in 1..=3 {
        let started = Instant::now();
        let control = AuthControl::new(cell.get());
        let allowed = control.check_permission("alice", "data1", "read");
        println!("Request {}: allowed={} in {:.2?}", i, allowed, started.elapsed());
    }
    println!("Enforcer built {} time(s)", cell.constructions());
}
