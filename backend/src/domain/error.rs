//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps each
//! [`ErrorCode`] to a status code and renders the message to clients.

use std::fmt;

use super::TraceId;

/// Message returned when the `username` header names no stored user.
pub const USER_NOT_FOUND: &str = "User not found";
/// Message returned when a username is registered twice.
pub const USER_ALREADY_EXISTS: &str = "User already exists!";
/// Message returned when a deadline cannot be parsed.
pub const INVALID_DEADLINE: &str = "Invalid date in deadline";
/// Message returned when the todo id is unknown for the resolved user.
pub const TODO_NOT_FOUND: &str = "Todo not found";

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The caller supplied a username that is not registered.
    UserNotFound,
    /// The username requested at registration is already taken.
    UserAlreadyExists,
    /// The deadline value is missing or not a calendar date/time.
    InvalidDeadline,
    /// The todo id does not resolve within the caller's list.
    TodoNotFound,
    /// The request body is malformed or fails validation.
    InvalidRequest,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Domain error payload.
///
/// Every error terminates the request it was raised for; nothing is retried.
///
/// # Examples
/// ```
/// use todo_backend::domain::{Error, ErrorCode};
///
/// let err = Error::todo_not_found();
/// assert_eq!(err.code(), ErrorCode::TodoNotFound);
/// assert_eq!(err.message(), "Todo not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error, capturing the trace identifier in scope, if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to clients.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier of the request that raised the error.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::UserNotFound`].
    pub fn user_not_found() -> Self {
        Self::new(ErrorCode::UserNotFound, USER_NOT_FOUND)
    }

    /// Convenience constructor for [`ErrorCode::UserAlreadyExists`].
    pub fn user_already_exists() -> Self {
        Self::new(ErrorCode::UserAlreadyExists, USER_ALREADY_EXISTS)
    }

    /// Convenience constructor for [`ErrorCode::InvalidDeadline`].
    pub fn invalid_deadline() -> Self {
        Self::new(ErrorCode::InvalidDeadline, INVALID_DEADLINE)
    }

    /// Convenience constructor for [`ErrorCode::TodoNotFound`].
    pub fn todo_not_found() -> Self {
        Self::new(ErrorCode::TodoNotFound, TODO_NOT_FOUND)
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
