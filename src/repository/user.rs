use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{MockDatabase, Row};
use crate::error::RepoError;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: u64,
    /// Login name
    pub username: String,
    /// Contact address
    pub email: String,
}

impl User {
    /// Creates a user.
    pub fn new(id: u64, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Storage-agnostic access to users.
pub trait UserRepository {
    /// Stores `user`.
    ///
    /// # Errors
    ///
    /// Returns `RepoError` if the user cannot be stored.
    fn add(&self, user: User) -> Result<(), RepoError>;

    /// Returns every stored user in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepoError` if a stored record cannot be read back.
    fn list_all(&self) -> Result<Vec<User>, RepoError>;

    /// Returns the first user with `id`, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepoError` if a stored record cannot be read back.
    fn find_by_id(&self, id: u64) -> Result<Option<User>, RepoError>;
}

impl<R: UserRepository + ?Sized> UserRepository for &R {
    fn add(&self, user: User) -> Result<(), RepoError> {
        (**self).add(user)
    }

    fn list_all(&self) -> Result<Vec<User>, RepoError> {
        (**self).list_all()
    }

    fn find_by_id(&self, id: u64) -> Result<Option<User>, RepoError> {
        (**self).find_by_id(id)
    }
}

/// [`UserRepository`] backed by a [`MockDatabase`].
///
/// # Example
///
/// ```
/// use gateway_patterns::repository::{InMemoryUserRepository, MockDatabase, User, UserRepository};
///
/// let db = MockDatabase::new();
/// let repo = InMemoryUserRepository::new(&db);
///
/// repo.add(User::new(1, "Alice", "alice@example.com")).unwrap();
///
/// assert_eq!(repo.find_by_id(1).unwrap().unwrap().username, "Alice");
/// assert!(repo.find_by_id(2).unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct InMemoryUserRepository<'db> {
    db: &'db MockDatabase,
}

impl<'db> InMemoryUserRepository<'db> {
    /// Creates a repository over `db`.
    pub fn new(db: &'db MockDatabase) -> Self {
        Self { db }
    }

    fn to_row(user: &User) -> Result<Row, RepoError> {
        match serde_json::to_value(user) {
            Ok(Value::Object(row)) => Ok(row),
            Ok(other) => Err(RepoError::Encode(format!("expected an object, got {}", other))),
            Err(e) => Err(RepoError::Encode(e.to_string())),
        }
    }

    fn from_row(row: Row) -> Result<User, RepoError> {
        serde_json::from_value(Value::Object(row)).map_err(|e| RepoError::Decode(e.to_string()))
    }
}

impl UserRepository for InMemoryUserRepository<'_> {
    fn add(&self, user: User) -> Result<(), RepoError> {
        let row = Self::to_row(&user)?;
        self.db.insert_row(row);
        tracing::debug!(id = user.id, "user row inserted");
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<User>, RepoError> {
        self.db.select_all().into_iter().map(Self::from_row).collect()
    }

    fn find_by_id(&self, id: u64) -> Result<Option<User>, RepoError> {
        for row in self.db.select_all() {
            if row.get("id").and_then(Value::as_u64) == Some(id) {
                return Self::from_row(row).map(Some);
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn add_stores_dict_shaped_row() {
        let db = MockDatabase::new();
        let repo = InMemoryUserRepository::new(&db);

        repo.add(User::new(7, "Alice", "alice@example.com")).unwrap();

        let rows = db.select_all();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["id"], json!(7));
        assert_eq!(rows[0]["username"], json!("Alice"));
        assert_eq!(rows[0]["email"], json!("alice@example.com"));
    }

    #[test]
    fn list_all_keeps_insertion_order() {
        let db = MockDatabase::new();
        let repo = InMemoryUserRepository::new(&db);

        repo.add(User::new(2, "Bob", "bob@example.com")).unwrap();
        repo.add(User::new(1, "Alice", "alice@example.com")).unwrap();

        let users = repo.list_all().unwrap();
        assert_eq!(
            users,
            vec![
                User::new(2, "Bob", "bob@example.com"),
                User::new(1, "Alice", "alice@example.com"),
            ]
        );
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let db = MockDatabase::new();
        let repo = InMemoryUserRepository::new(&db);

        repo.add(User::new(1, "Alice", "a@example.com")).unwrap();
        repo.add(User::new(1, "Impostor", "i@example.com")).unwrap();

        assert_eq!(repo.find_by_id(1).unwrap().unwrap().username, "Alice");
        assert_eq!(repo.find_by_id(99).unwrap(), None);
    }

    #[test]
    fn malformed_row_is_a_decode_error() {
        let db = MockDatabase::new();
        let mut row = Row::new();
        row.insert("id".to_string(), json!(3));
        db.insert_row(row);

        let repo = InMemoryUserRepository::new(&db);

        assert!(matches!(repo.list_all(), Err(RepoError::Decode(_))));
        assert!(matches!(repo.find_by_id(3), Err(RepoError::Decode(_))));
    }
}
