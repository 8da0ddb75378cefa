//! Repository over an in-memory table.
//!
//! This module provides:
//! - `User`: the domain entity
//! - `MockDatabase`: a table of dict-shaped rows standing in for a real store
//! - `UserRepository`: add/list/find over `User`, hiding the storage shape
//! - `InMemoryUserRepository`: the `MockDatabase` adapter, the only place
//!   rows and users are converted into each other
//! - `UserService`: business logic that talks to a repository only
//! - `UserManager`: the coupled variant that writes rows itself
//!
//! The service cannot tell whether its repository is backed by a vector or
//! a real database.

mod database;
mod service;
mod user;

pub use database::{MockDatabase, Row};
pub use service::{UserManager, UserService};
pub use user::{InMemoryUserRepository, User, UserRepository};
