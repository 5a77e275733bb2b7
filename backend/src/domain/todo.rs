//! Todo entity.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::Deadline;
use super::deadline::serialize_timestamp;

/// Stable todo identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Generate a new random [`TodoId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier taken from a route path.
    ///
    /// Only the canonical form that responses carry (hyphenated, lowercase)
    /// is accepted; anything else can never resolve to a stored todo.
    pub fn parse(raw: &str) -> Option<Self> {
        let id = Uuid::parse_str(raw).ok()?;
        (id.hyphenated().to_string() == raw).then_some(Self(id))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutation applied to a stored todo in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoChange {
    /// Replace the title and deadline.
    Revise { title: String, deadline: Deadline },
    /// Mark the todo as done.
    Complete,
}

/// A task owned by exactly one user.
///
/// ## Invariants
/// - `id` and `created_at` never change after construction.
/// - `done` starts `false` and can only move to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    id: TodoId,
    title: String,
    done: bool,
    deadline: Deadline,
    #[serde(serialize_with = "serialize_timestamp")]
    created_at: DateTime<Utc>,
}

impl Todo {
    /// Create an open todo with a fresh identifier.
    pub fn new(title: impl Into<String>, deadline: Deadline, created_at: DateTime<Utc>) -> Self {
        Self {
            id: TodoId::random(),
            title: title.into(),
            done: false,
            deadline,
            created_at,
        }
    }

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn deadline(&self) -> &Deadline {
        &self.deadline
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    /// Apply `change`, leaving `id` and `created_at` untouched.
    pub fn apply(&mut self, change: TodoChange) {
        match change {
            TodoChange::Revise { title, deadline } => {
                self.title = title;
                self.deadline = deadline;
            }
            TodoChange::Complete => self.done = true,
        }
    }
}
