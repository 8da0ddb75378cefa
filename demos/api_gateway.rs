//! API gateway demonstration.
//!
//! Runs the same calls twice:
//! 1. a client that wires the authenticator and the backend itself
//! 2. a client that only knows the gateway
//!
//! Then shows the three request outcomes at the gateway boundary.
//!
//! Run with: `cargo run --example api_gateway`

use gateway_patterns::{DirectClient, Gateway, GatewayClient, Payload, Token};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() {
    init_tracing();

    println!("=== Without gateway ===");
    let direct: DirectClient = DirectClient::default();
    println!("Result: {}", direct.do_work("valid-token", "Hello World"));
    println!("Result: {}", direct.do_work("bad-token", "Hello World"));

    println!("\n=== With gateway ===");
    let gateway = Gateway::with_defaults();
    let client = GatewayClient::new(&gateway);
    println!("Result: {}", client.do_work("valid-token", "Hello World"));
    println!("Result: {}", client.do_work("bad-token", "Hello World"));

    println!("\n=== Gateway boundary ===");
    let empty = Payload::new();
    let unknown = gateway.handle_request("/unknown", &Token::new("valid-token"), &empty);
    println!("GET /unknown        -> {} ({})", unknown.status_code(), unknown);
    let missing = gateway.handle_request("/api/v1/work", &Token::new("valid-token"), &empty);
    println!("POST without prompt -> {} ({})", missing.status_code(), missing);
}
