//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod error;
pub mod headers;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod todos;
pub mod users;

pub use error::{ApiResult, ErrorBody, json_config};

/// Register every endpoint on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use todo_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::create_user)
        .service(todos::list_todos)
        .service(todos::create_todo)
        .service(todos::update_todo)
        .service(todos::mark_done)
        .service(todos::delete_todo);
}
