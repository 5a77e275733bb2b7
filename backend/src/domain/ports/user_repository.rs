//! Port abstraction for the entity store holding users and their todos.
//!
//! Adapters must apply each call atomically: no caller may observe a user or
//! todo halfway through a mutation.

use async_trait::async_trait;

use crate::domain::{Todo, TodoChange, TodoId, User, Username};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// A user with the same username is already stored.
        Duplicate { username: String } => "user {username} is already stored",
        /// The owning user is not stored.
        UserMissing { username: String } => "user {username} is not stored",
        /// The store lock was poisoned by a panicking writer.
        Poisoned { message: String } => "user store lock poisoned: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user. Fails with [`UserPersistenceError::Duplicate`] and
    /// leaves the store unchanged when the username is taken.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch a user by username.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Append a todo to the user's list.
    async fn push_todo(&self, username: &Username, todo: &Todo)
    -> Result<(), UserPersistenceError>;

    /// Apply `change` to the user's todo in place and return the result.
    ///
    /// Returns `Ok(None)` when the todo is not in the user's list.
    async fn apply_todo_change(
        &self,
        username: &Username,
        todo_id: &TodoId,
        change: &TodoChange,
    ) -> Result<Option<Todo>, UserPersistenceError>;

    /// Remove the user's todo with `todo_id`, returning it.
    ///
    /// Returns `Ok(None)` when the todo is not in the user's list.
    async fn remove_todo(
        &self,
        username: &Username,
        todo_id: &TodoId,
    ) -> Result<Option<Todo>, UserPersistenceError>;
}
