//! Shared helpers for HTTP integration tests.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use serde_json::{Value, json};
use todo_backend::Trace;
use todo_backend::inbound::http::state::HttpState;
use todo_backend::inbound::http::{configure, json_config};
use todo_backend::outbound::memory::InMemoryUserRepository;

pub const USERNAME: &str = "username";

/// Clock frozen at [`fixture_now`].
pub struct FixtureClock;

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        fixture_now().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        fixture_now()
    }
}

pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Start a service over an empty store.
pub async fn app()
-> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    let state = HttpState::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(FixtureClock),
    );
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

/// Status and decoded JSON body; `Value::Null` when the body is empty.
pub async fn send<S, B>(app: &S, request: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let bytes = test::read_body(response).await;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response body is JSON")
    };
    (status, body)
}

/// Register `username` and return the created user.
pub async fn register<S, B>(app: &S, username: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = send(
        app,
        test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "name": username.to_uppercase(), "username": username })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

/// Create a todo for `username` and return it.
pub async fn create_todo<S, B>(app: &S, username: &str, title: &str, deadline: Value) -> Value
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = send(
        app,
        test::TestRequest::post()
            .uri("/todos")
            .insert_header((USERNAME, username))
            .set_json(json!({ "title": title, "deadline": deadline })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

/// List the todos of `username`.
pub async fn list<S, B>(app: &S, username: &str) -> Vec<Value>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = send(
        app,
        test::TestRequest::get()
            .uri("/todos")
            .insert_header((USERNAME, username)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    match body {
        Value::Array(todos) => todos,
        other => panic!("expected array, got {other}"),
    }
}

pub fn id_of(todo: &Value) -> String {
    todo["id"].as_str().expect("todo id is a string").to_owned()
}
