//! Use-cases behind the HTTP routes.
//!
//! Every operation receives the context produced by the guards it depends on
//! and performs exactly one read or mutation against the [`UserRepository`].

use std::sync::Arc;

use mockable::Clock;
use tracing::{error, info};

use super::guards::{self, TodoContext, UserContext};
use super::ports::{UserPersistenceError, UserRepository};
use super::{Deadline, DeadlineInput, Error, Todo, TodoChange, User, Username};

/// Clock handle shared across request handlers.
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

/// Per-user to-do list operations over an injected entity store.
#[derive(Clone)]
pub struct TodoListService {
    users: Arc<dyn UserRepository>,
    clock: SharedClock,
}

impl TodoListService {
    /// Build the service from a store and a clock used for `created_at`.
    pub fn new(users: Arc<dyn UserRepository>, clock: SharedClock) -> Self {
        Self { users, clock }
    }

    /// Resolve the caller; see [`guards::user_exists`].
    pub async fn user_exists(&self, username: Option<&str>) -> Result<UserContext, Error> {
        guards::user_exists(self.users.as_ref(), username).await
    }

    /// Validate a payload deadline; see [`guards::deadline_is_valid`].
    pub fn deadline_is_valid(&self, input: Option<&DeadlineInput>) -> Result<Deadline, Error> {
        guards::deadline_is_valid(input)
    }

    /// Register a user with an empty todo list.
    pub async fn create_user(&self, name: String, username: Username) -> Result<User, Error> {
        let user = User::register(name, username);
        self.users.insert(&user).await.map_err(map_persistence_error)?;
        info!(user_id = %user.id(), username = %user.username(), "user created");
        Ok(user)
    }

    /// The resolved user's todos, unmodified and in insertion order.
    pub fn list_todos<'a>(&self, ctx: &'a UserContext) -> &'a [Todo] {
        ctx.user().todos()
    }

    /// Append an open todo stamped with the current time.
    pub async fn create_todo(
        &self,
        ctx: &UserContext,
        title: String,
        deadline: Deadline,
    ) -> Result<Todo, Error> {
        let todo = Todo::new(title, deadline, self.clock.utc());
        self.users
            .push_todo(ctx.user().username(), &todo)
            .await
            .map_err(map_persistence_error)?;
        info!(username = %ctx.user().username(), todo_id = %todo.id(), "todo created");
        Ok(todo)
    }

    /// Replace the resolved todo's title and deadline.
    pub async fn update_todo(
        &self,
        ctx: &TodoContext,
        title: String,
        deadline: Deadline,
    ) -> Result<Todo, Error> {
        self.apply(ctx, TodoChange::Revise { title, deadline }).await
    }

    /// Mark the resolved todo as done. Repeated calls keep it done.
    pub async fn mark_done(&self, ctx: &TodoContext) -> Result<Todo, Error> {
        self.apply(ctx, TodoChange::Complete).await
    }

    /// Remove the resolved todo, and only that todo, from its owner's list.
    pub async fn delete_todo(&self, ctx: &TodoContext) -> Result<(), Error> {
        let username = ctx.user().username();
        let todo_id = ctx.todo().id();
        self.users
            .remove_todo(username, todo_id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(Error::todo_not_found)?;
        info!(%username, %todo_id, "todo deleted");
        Ok(())
    }

    async fn apply(&self, ctx: &TodoContext, change: TodoChange) -> Result<Todo, Error> {
        self.users
            .apply_todo_change(ctx.user().username(), ctx.todo().id(), &change)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(Error::todo_not_found)
    }
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    match err {
        UserPersistenceError::Duplicate { .. } => Error::user_already_exists(),
        UserPersistenceError::UserMissing { .. } => Error::user_not_found(),
        UserPersistenceError::Poisoned { .. } => {
            error!(error = %err, "user store unavailable");
            Error::internal(err.to_string())
        }
    }
}
