use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let default_addr = SocketAddr::from(([0, 0, 0, 0], 8000));

        let bind_addr = match env::var("BIND_ADDR") {
            Ok(raw) => raw.parse::<SocketAddr>().unwrap_or_else(|e| {
                tracing::warn!(value = %raw, error = %e, "invalid BIND_ADDR, using {default_addr}");
                default_addr
            }),
            Err(_) => default_addr,
        };

        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".to_string())
            .into();

        Self {
            bind_addr,
            static_dir,
        }
    }
}
