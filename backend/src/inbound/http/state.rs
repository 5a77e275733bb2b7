//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserRepository;
use crate::domain::{SharedClock, TodoListService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub todos: TodoListService,
}

impl HttpState {
    /// Construct state from the user store and the clock used to stamp new
    /// todos.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use todo_backend::inbound::http::state::HttpState;
    /// use todo_backend::outbound::memory::InMemoryUserRepository;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryUserRepository::new()),
    ///     Arc::new(DefaultClock),
    /// );
    /// let _cloned = state.clone();
    /// ```
    pub fn new(users: Arc<dyn UserRepository>, clock: SharedClock) -> Self {
        Self {
            todos: TodoListService::new(users, clock),
        }
    }
}
