//! In-memory entity store backing [`UserRepository`].
//!
//! Users are kept in registration order and looked up by linear scan. One
//! store-wide lock serialises writers, so every port call is atomic.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{Todo, TodoChange, TodoId, User, Username};

/// Process-local user store.
///
/// Construct one per server (or per test); instances share nothing.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, UserPersistenceError> {
        self.users.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, UserPersistenceError> {
        self.users.write().map_err(poisoned)
    }
}

fn poisoned<T>(err: PoisonError<T>) -> UserPersistenceError {
    UserPersistenceError::poisoned(err.to_string())
}

fn find_mut<'a>(users: &'a mut [User], username: &Username) -> Option<&'a mut User> {
    users.iter_mut().find(|user| user.username() == username)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.write()?;
        if users.iter().any(|stored| stored.username() == user.username()) {
            return Err(UserPersistenceError::duplicate(user.username().to_string()));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let users = self.read()?;
        Ok(users.iter().find(|user| user.username() == username).cloned())
    }

    async fn push_todo(
        &self,
        username: &Username,
        todo: &Todo,
    ) -> Result<(), UserPersistenceError> {
        let mut users = self.write()?;
        let user = find_mut(&mut users, username)
            .ok_or_else(|| UserPersistenceError::user_missing(username.to_string()))?;
        user.push_todo(todo.clone());
        Ok(())
    }

    async fn apply_todo_change(
        &self,
        username: &Username,
        todo_id: &TodoId,
        change: &TodoChange,
    ) -> Result<Option<Todo>, UserPersistenceError> {
        let mut users = self.write()?;
        let updated = find_mut(&mut users, username)
            .and_then(|user| user.find_todo_mut(todo_id))
            .map(|todo| {
                todo.apply(change.clone());
                todo.clone()
            });
        Ok(updated)
    }

    async fn remove_todo(
        &self,
        username: &Username,
        todo_id: &TodoId,
    ) -> Result<Option<Todo>, UserPersistenceError> {
        let mut users = self.write()?;
        Ok(find_mut(&mut users, username).and_then(|user| user.remove_todo(todo_id)))
    }
}
