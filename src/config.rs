use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATA_FILE: &str = "items.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    bind_addr: SocketAddr,
    data_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_string("ITEMS_BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .context("ITEMS_BIND_ADDR must be a valid host:port")?;

        let data_file = PathBuf::from(env_string("ITEMS_DATA_FILE", DEFAULT_DATA_FILE));

        Ok(Self {
            bind_addr,
            data_file,
        })
    }

    pub fn for_testing(data_file: PathBuf) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            data_file,
        }
    }

    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    pub fn with_data_file(mut self, data_file: impl Into<PathBuf>) -> Self {
        self.data_file = data_file.into();
        self
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    pub fn data_file(&self) -> &PathBuf {
        &self.data_file
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_published_constants() {
        let config = AppConfig::default();
        assert_eq!(config.bind_addr(), DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.data_file(), &PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn builders_override_fields() {
        let config = AppConfig::for_testing(PathBuf::from("a.json"))
            .with_data_file("b.json")
            .with_bind_addr("127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.bind_addr().port(), 8080);
        assert_eq!(config.data_file(), &PathBuf::from("b.json"));
    }
}
