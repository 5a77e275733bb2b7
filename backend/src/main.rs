//! Backend entry-point: loads settings and serves the todo list API.

mod server;

use std::sync::Arc;

use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerSettings, create_server};
use todo_backend::inbound::http::state::HttpState;
use todo_backend::outbound::memory::InMemoryUserRepository;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let state = HttpState::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(DefaultClock),
    );

    info!(host = settings.host(), port = settings.port(), "starting server");
    create_server(state, &settings)?.await
}
