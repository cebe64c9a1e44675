use crate::config::env::{self, EnvKey};
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Redis,
}

#[derive(Debug, Error)]
#[error("unknown storage backend `{0}` (expected `memory` or `redis`)")]
pub struct UnknownBackend(String);

impl FromStr for StorageBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_port: u16,
    pub storage_backend: StorageBackend,
    pub redis_url: String,
}

impl AppConfig {
    pub fn new() -> Result<Self, UnknownBackend> {
        Ok(Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 8000),
            storage_backend: env::get_or(EnvKey::StorageBackend, "memory").parse()?,
            redis_url: env::get_or(EnvKey::RedisUrl, "redis://127.0.0.1:6379"),
        })
    }
}
