//! User registration endpoint.
//!
//! ```text
//! POST /users {"name":"Ann","username":"ann"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, UserValidationError, Username};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::UserSchema;
use crate::inbound::http::state::HttpState;

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "Ann")]
    pub name: String,
    #[schema(example = "ann")]
    pub username: String,
}

fn map_validation_error(err: UserValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

/// Register a new user with an empty todo list.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Username taken or request invalid", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tags = ["users"],
    operation_id = "createUser",
    security([])
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let CreateUserRequest { name, username } = payload.into_inner();
    let username = Username::new(username).map_err(map_validation_error)?;
    let user = state.todos.create_user(name, username).await?;
    Ok(HttpResponse::Created().json(user))
}
