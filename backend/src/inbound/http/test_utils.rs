//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::inbound::http::state::HttpState;
use crate::inbound::http::{configure, json_config};
use crate::outbound::memory::InMemoryUserRepository;

/// Clock frozen at a fixed instant.
pub struct FixtureClock(pub DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Instant every todo created through [`test_app`] is stamped with.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 14, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Build an application over a fresh in-memory store and a frozen clock.
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(FixtureClock(fixture_now())),
    );
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .configure(configure)
}
