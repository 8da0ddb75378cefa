//! Dependency injection demonstration.
//!
//! A controller that builds its own notifier next to one that receives it.
//! The injected one can be handed a recorder instead of the SMTP stub.
//!
//! Run with: `cargo run --example dependency_injection`

use gateway_patterns::notify::{
    HardwiredUserController, RecordingNotifier, SmtpNotifier, UserController,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Hardwired notifier ===");
    HardwiredUserController::new().register("Alice");

    println!("\n=== Injected SMTP notifier ===");
    UserController::new(SmtpNotifier).register("Bob");

    println!("\n=== Injected recorder ===");
    let recorder = RecordingNotifier::new();
    UserController::new(&recorder).register("Charlie");
    for message in recorder.messages() {
        println!("[Mock Email] {}", message);
    }
}
