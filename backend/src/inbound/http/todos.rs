//! Todo list endpoints scoped to the caller named by the `username` header.
//!
//! ```text
//! GET    /todos
//! POST   /todos           {"title":"Buy milk","deadline":"2030-01-01"}
//! PUT    /todos/{id}      {"title":"Buy oat milk","deadline":"2030-02-01"}
//! PATCH  /todos/{id}/done
//! DELETE /todos/{id}
//! ```
//!
//! Each handler resolves the caller first, then the todo, then the deadline,
//! then the title, so the first failing check decides the error. The body is
//! lifted without imposing a shape so that field problems never pre-empt the
//! existence checks.

use actix_web::{HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::{DeadlineInput, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::headers::UsernameHeader;
use crate::inbound::http::schemas::TodoSchema;
use crate::inbound::http::state::HttpState;

const TITLE_REQUIRED: &str = "title must be a string";

/// Body accepted when creating or replacing a todo.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct TodoRequest {
    #[schema(value_type = String, example = "Buy milk")]
    pub title: Option<Value>,
    /// Date string or epoch milliseconds.
    #[schema(value_type = String, example = "2030-01-01")]
    pub deadline: Option<Value>,
}

impl TodoRequest {
    /// Take the title, which must be a JSON string.
    fn into_title(self) -> Result<String, Error> {
        match self.title {
            Some(Value::String(title)) => Ok(title),
            _ => Err(Error::invalid_request(TITLE_REQUIRED)),
        }
    }

    /// Classify the raw deadline; `None` for anything that is neither a
    /// string nor a number.
    fn deadline_input(&self) -> Option<DeadlineInput> {
        match self.deadline.as_ref()? {
            Value::String(text) => Some(DeadlineInput::Text(text.clone())),
            Value::Number(number) => number
                .as_i64()
                .or_else(|| {
                    number
                        .as_f64()
                        .filter(|millis| millis.is_finite())
                        .map(|millis| millis.trunc() as i64)
                })
                .map(DeadlineInput::EpochMillis),
            _ => None,
        }
    }
}

/// List the caller's todos in creation order.
#[utoipa::path(
    get,
    path = "/todos",
    responses(
        (status = 200, description = "Todos of the caller", body = [TodoSchema]),
        (status = 400, description = "User not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "listTodos"
)]
#[get("/todos")]
pub async fn list_todos(
    state: web::Data<HttpState>,
    username: UsernameHeader,
) -> ApiResult<HttpResponse> {
    let ctx = state.todos.user_exists(username.as_deref()).await?;
    Ok(HttpResponse::Ok().json(state.todos.list_todos(&ctx)))
}

/// Append a todo to the caller's list.
#[utoipa::path(
    post,
    path = "/todos",
    request_body = TodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoSchema),
        (status = 400, description = "User not found, invalid deadline or title", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "createTodo"
)]
#[post("/todos")]
pub async fn create_todo(
    state: web::Data<HttpState>,
    username: UsernameHeader,
    payload: web::Json<TodoRequest>,
) -> ApiResult<HttpResponse> {
    let ctx = state.todos.user_exists(username.as_deref()).await?;
    let request = payload.into_inner();
    let deadline = state
        .todos
        .deadline_is_valid(request.deadline_input().as_ref())?;
    let title = request.into_title()?;
    let todo = state.todos.create_todo(&ctx, title, deadline).await?;
    Ok(HttpResponse::Created().json(todo))
}

/// Replace the title and deadline of one of the caller's todos.
#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = String, Path, description = "Todo identifier")),
    request_body = TodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = TodoSchema),
        (status = 400, description = "User not found, invalid deadline or title", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "updateTodo"
)]
#[put("/todos/{id}")]
pub async fn update_todo(
    state: web::Data<HttpState>,
    username: UsernameHeader,
    path: web::Path<String>,
    payload: web::Json<TodoRequest>,
) -> ApiResult<HttpResponse> {
    let ctx = state
        .todos
        .user_exists(username.as_deref())
        .await?
        .todo_exists(path.as_str())?;
    let request = payload.into_inner();
    let deadline = state
        .todos
        .deadline_is_valid(request.deadline_input().as_ref())?;
    let title = request.into_title()?;
    let todo = state.todos.update_todo(&ctx, title, deadline).await?;
    Ok(HttpResponse::Ok().json(todo))
}

/// Mark one of the caller's todos as done. Repeating the call is harmless.
#[utoipa::path(
    patch,
    path = "/todos/{id}/done",
    params(("id" = String, Path, description = "Todo identifier")),
    responses(
        (status = 200, description = "Todo marked done", body = TodoSchema),
        (status = 400, description = "User not found", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "markTodoDone"
)]
#[patch("/todos/{id}/done")]
pub async fn mark_done(
    state: web::Data<HttpState>,
    username: UsernameHeader,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let ctx = state
        .todos
        .user_exists(username.as_deref())
        .await?
        .todo_exists(path.as_str())?;
    let todo = state.todos.mark_done(&ctx).await?;
    Ok(HttpResponse::Ok().json(todo))
}

/// Remove one of the caller's todos.
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = String, Path, description = "Todo identifier")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 400, description = "User not found", body = ErrorBody),
        (status = 404, description = "Todo not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["todos"],
    operation_id = "deleteTodo"
)]
#[delete("/todos/{id}")]
pub async fn delete_todo(
    state: web::Data<HttpState>,
    username: UsernameHeader,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let ctx = state
        .todos
        .user_exists(username.as_deref())
        .await?
        .todo_exists(path.as_str())?;
    state.todos.delete_todo(&ctx).await?;
    Ok(HttpResponse::NoContent().finish())
}
