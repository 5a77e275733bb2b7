//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use todo_backend::Trace;
#[cfg(debug_assertions)]
use todo_backend::doc::ApiDoc;
use todo_backend::inbound::http::state::HttpState;
use todo_backend::inbound::http::{configure, json_config};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .wrap(Cors::permissive())
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server sharing one [`HttpState`] across workers.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(http_state: HttpState, settings: &ServerSettings) -> std::io::Result<Server> {
    let http_state = web::Data::new(http_state);
    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(settings.bind_addr())?
        .run();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use mockable::DefaultClock;
    use rstest::rstest;
    use todo_backend::TRACE_ID_HEADER;
    use todo_backend::outbound::memory::InMemoryUserRepository;

    fn state() -> web::Data<HttpState> {
        web::Data::new(HttpState::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(DefaultClock),
        ))
    }

    #[rstest]
    #[actix_rt::test]
    async fn answers_cors_preflight_for_any_origin() {
        let app = test::init_service(build_app(state())).await;
        let request = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/todos")
            .insert_header((header::ORIGIN, "https://example.org"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "username, content-type"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("https://example.org")
        );
    }

    #[rstest]
    #[actix_rt::test]
    async fn error_responses_carry_cors_and_trace_headers() {
        let app = test::init_service(build_app(state())).await;
        let request = test::TestRequest::get()
            .uri("/todos")
            .insert_header((header::ORIGIN, "https://example.org"))
            .insert_header(("username", "ghost"))
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
    }
}
