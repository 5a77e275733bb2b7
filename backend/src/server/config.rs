//! HTTP server settings loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3333;

/// Listener settings, read from `TODOS_*` environment variables and the
/// command line.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TODOS")]
pub struct ServerSettings {
    /// Interface address or host name to bind.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to `3333`.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Host and port pair handed to the listener.
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host(), self.port())
    }
}
