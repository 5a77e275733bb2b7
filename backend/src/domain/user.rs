//! User aggregate: identity, unique username and the owned todo list.

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::{Todo, TodoId};

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The username is empty once trimmed of whitespace.
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Stable user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Login handle that identifies a user on every to-do request.
///
/// Stored without surrounding whitespace, since header values arrive
/// trimmed; after that, two usernames are equal only if byte-identical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    ///
    /// # Examples
    /// ```
    /// use todo_backend::domain::Username;
    ///
    /// assert!(Username::new("ann").is_ok());
    /// assert!(Username::new("   ").is_err());
    /// assert_eq!(Username::new(" ann ").map(|name| name.to_string()), Ok("ann".to_owned()));
    /// ```
    pub fn new(username: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let username = username.as_ref().trim();
        if username.is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(username.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Application user.
///
/// ## Invariants
/// - `id` and `username` never change after registration.
/// - `todos` keeps insertion order and only changes through todo operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    username: Username,
    todos: Vec<Todo>,
}

impl User {
    /// Register a user with a fresh id and an empty todo list.
    pub fn register(name: impl Into<String>, username: Username) -> Self {
        Self {
            id: UserId::random(),
            name: name.into(),
            username,
            todos: Vec::new(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Todos in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Find one of this user's todos; other users' todos are never visible.
    pub fn find_todo(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    /// Mutable counterpart of [`User::find_todo`].
    pub fn find_todo_mut(&mut self, id: &TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id() == id)
    }

    /// Append a todo to the end of the list.
    pub fn push_todo(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Remove exactly the todo whose id is `id`, preserving the order of the
    /// remaining ones.
    pub fn remove_todo(&mut self, id: &TodoId) -> Option<Todo> {
        let position = self.todos.iter().position(|todo| todo.id() == id)?;
        Some(self.todos.remove(position))
    }
}
