//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the JSON those types serialize to and exist only for
//! documentation.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Todo`].
#[derive(ToSchema)]
#[schema(as = Todo)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct TodoSchema {
    /// Stable todo identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: uuid::Uuid,
    /// Short description of the task.
    #[schema(example = "Buy milk")]
    title: String,
    /// Completion flag; starts `false`.
    done: bool,
    /// Due instant in RFC 3339 UTC.
    #[schema(example = "2030-01-01T00:00:00.000Z")]
    deadline: String,
    /// Creation instant in RFC 3339 UTC; never changes.
    #[schema(example = "2026-10-14T09:30:00.000Z")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable user identifier.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: uuid::Uuid,
    /// Display name.
    #[schema(example = "Ann")]
    name: String,
    /// Unique handle passed in the `username` header.
    #[schema(example = "ann")]
    username: String,
    /// Todos owned by the user, in creation order.
    todos: Vec<TodoSchema>,
}
