//! Domain primitives, guards and use-cases.
//!
//! Purpose: define the users-own-todos model independently of HTTP. Types
//! here validate their own invariants; adapters only translate.
//!
//! Public surface:
//! - `User`, `Username`, `Todo`, `Deadline`: entities and value objects.
//! - `Error`/`ErrorCode`: terminal request failures.
//! - `guards`: user, todo and deadline preconditions.
//! - `TodoListService`: one use-case per route.
//! - `ports::UserRepository`: the entity store seam.

pub mod deadline;
pub mod error;
pub mod guards;
pub mod ports;
pub mod todo;
pub mod todo_service;
pub mod trace_id;
pub mod user;

pub use self::deadline::{Deadline, DeadlineError, DeadlineInput};
pub use self::error::{Error, ErrorCode};
pub use self::guards::{TodoContext, UserContext};
pub use self::todo::{Todo, TodoChange, TodoId};
pub use self::todo_service::{SharedClock, TodoListService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserId, UserValidationError, Username};
