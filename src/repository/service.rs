use serde_json::json;

use super::{MockDatabase, Row, User, UserRepository};
use crate::error::RepoError;

/// Business logic for user registration.
///
/// Talks only to a [`UserRepository`]; storage details stay behind it.
///
/// # Example
///
/// ```
/// use gateway_patterns::repository::{InMemoryUserRepository, MockDatabase, UserService};
///
/// let db = MockDatabase::new();
/// let service = UserService::new(InMemoryUserRepository::new(&db));
///
/// service.register_user(1, "Alice", "alice@example.com").unwrap();
/// service.register_user(2, "Bob", "bob@example.com").unwrap();
///
/// assert_eq!(service.users().unwrap().len(), 2);
/// ```
#[derive(Debug)]
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service over `repo`.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Builds a user and hands it to the repository.
    ///
    /// # Errors
    ///
    /// Returns [`RepoError::Invalid`] for a blank username, or whatever the
    /// repository reports.
    pub fn register_user(&self, id: u64, username: &str, email: &str) -> Result<User, RepoError> {
        if username.trim().is_empty() {
            return Err(RepoError::Invalid("username is required"));
        }

        let user = User::new(id, username, email);
        self.repo.add(user.clone())?;
        tracing::info!(id, username, "registered user via repository");
        Ok(user)
    }

    /// Returns every registered user.
    ///
    /// # Errors
    ///
    /// Propagates repository failures.
    pub fn users(&self) -> Result<Vec<User>, RepoError> {
        self.repo.list_all()
    }
}

/// User management that writes rows straight into the database.
///
/// Mixes business logic with the storage format; changing the store means
/// rewriting every method.
#[derive(Debug)]
pub struct UserManager<'db> {
    db: &'db MockDatabase,
}

impl<'db> UserManager<'db> {
    /// Creates a manager over `db`.
    pub fn new(db: &'db MockDatabase) -> Self {
        Self { db }
    }

    /// Inserts a hand-built row.
    pub fn create_user(&self, id: u64, username: &str, email: &str) {
        let mut row = Row::new();
        row.insert("id".to_string(), json!(id));
        row.insert("username".to_string(), json!(username));
        row.insert("email".to_string(), json!(email));
        self.db.insert_row(row);
        tracing::info!(id, username, "created user row directly");
    }

    /// Decodes every row by hand, skipping rows that do not fit.
    pub fn get_all_users(&self) -> Vec<User> {
        self.db
            .select_all()
            .into_iter()
            .filter_map(|row| {
                Some(User::new(
                    row.get("id")?.as_u64()?,
                    row.get("username")?.as_str()?,
                    row.get("email")?.as_str()?,
                ))
            })
            .collect()
    }
}
