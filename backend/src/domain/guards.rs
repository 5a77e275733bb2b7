//! Request guards that resolve entities before a handler runs.
//!
//! Guards compose as typed contexts: [`user_exists`] yields a
//! [`UserContext`], and only a `UserContext` can be narrowed to a
//! [`TodoContext`]. Any guard may short-circuit with a terminal [`Error`];
//! the handler behind it then never runs.

use tracing::{debug, error};

use super::ports::{UserPersistenceError, UserRepository};
use super::{Deadline, DeadlineInput, Error, Todo, TodoId, User, Username};

/// A request whose caller resolved to a stored user.
#[derive(Debug, Clone)]
pub struct UserContext {
    user: User,
}

impl UserContext {
    /// The resolved user, as stored when the guard ran.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Resolve `raw_id` within this user's todos.
    ///
    /// Ids that are not UUIDs are treated like unknown ids.
    pub fn todo_exists(self, raw_id: &str) -> Result<TodoContext, Error> {
        let todo = TodoId::parse(raw_id)
            .and_then(|id| self.user.find_todo(&id).cloned())
            .ok_or_else(|| {
                debug!(username = %self.user.username(), todo_id = raw_id, "todo not found");
                Error::todo_not_found()
            })?;
        Ok(TodoContext {
            user: self.user,
            todo,
        })
    }
}

/// A request whose caller and target todo both resolved.
#[derive(Debug, Clone)]
pub struct TodoContext {
    user: User,
    todo: Todo,
}

impl TodoContext {
    /// The owning user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The resolved todo, as stored when the guard ran.
    pub fn todo(&self) -> &Todo {
        &self.todo
    }
}

/// Resolve the caller-supplied username to a stored user.
///
/// A missing or blank username is reported exactly like an unknown one.
pub async fn user_exists(
    users: &dyn UserRepository,
    username: Option<&str>,
) -> Result<UserContext, Error> {
    let Some(username) = username.and_then(|raw| Username::new(raw).ok()) else {
        debug!("request carried no usable username");
        return Err(Error::user_not_found());
    };
    match users.find_by_username(&username).await {
        Ok(Some(user)) => Ok(UserContext { user }),
        Ok(None) => {
            debug!(%username, "user not found");
            Err(Error::user_not_found())
        }
        Err(err) => Err(lookup_failed(&err)),
    }
}

/// Validate the deadline carried by a request payload.
pub fn deadline_is_valid(input: Option<&DeadlineInput>) -> Result<Deadline, Error> {
    let Some(input) = input else {
        debug!("deadline missing from payload");
        return Err(Error::invalid_deadline());
    };
    Deadline::parse(input).map_err(|err| {
        debug!(error = %err, "deadline rejected");
        Error::invalid_deadline()
    })
}

fn lookup_failed(err: &UserPersistenceError) -> Error {
    error!(error = %err, "user lookup failed");
    Error::internal(err.to_string())
}
