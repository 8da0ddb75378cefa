//! Repository demonstration.
//!
//! Registers users through a service that only sees a repository, then
//! through a manager that writes rows directly. Both read the same table.
//!
//! Run with: `cargo run --example repository`

use gateway_patterns::repository::{
    InMemoryUserRepository, MockDatabase, UserManager, UserRepository, UserService,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Direct table access ===");
    let legacy_db = MockDatabase::new();
    let manager = UserManager::new(&legacy_db);
    manager.create_user(1, "Alice", "alice@example.com");
    for user in manager.get_all_users() {
        println!("  {:?}", user);
    }

    println!("\n=== Through a repository ===");
    let db = MockDatabase::new();
    let repo = InMemoryUserRepository::new(&db);
    let service = UserService::new(&repo);
    service.register_user(1, "Alice", "alice@example.com")?;
    service.register_user(2, "Bob", "bob@example.com")?;

    for user in service.users()? {
        println!("  {:?}", user);
    }
    println!("  lookup id=2: {:?}", repo.find_by_id(2)?);

    if let Err(e) = service.register_user(3, "", "nobody@example.com") {
        println!("  rejected: {}", e);
    }

    Ok(())
}
