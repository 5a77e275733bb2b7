//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every todo-list endpoint, the schema wrappers from
//! [`crate::inbound::http::schemas`] and the `username` header used to
//! identify the caller. The document is served by Swagger UI in debug builds
//! and exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{TodoSchema, UserSchema};
use crate::inbound::http::todos::TodoRequest;
use crate::inbound::http::users::CreateUserRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the `username` header scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "UsernameHeader",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "username",
                "Username registered through POST /users.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Todo list API",
        description = "Per-user to-do lists held in memory.",
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("UsernameHeader" = [])),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::todos::list_todos,
        crate::inbound::http::todos::create_todo,
        crate::inbound::http::todos::update_todo,
        crate::inbound::http::todos::mark_done,
        crate::inbound::http::todos::delete_todo,
    ),
    components(schemas(UserSchema, TodoSchema, ErrorBody, CreateUserRequest, TodoRequest)),
    tags(
        (name = "users", description = "User registration"),
        (name = "todos", description = "Todo list of the calling user")
    )
)]
pub struct ApiDoc;
