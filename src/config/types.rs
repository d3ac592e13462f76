use std::{net::SocketAddr, path::PathBuf};

use serde::Deserialize;
use strum_macros::AsRefStr;

#[derive(Debug, Deserialize, Copy, Clone, AsRefStr)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    Sqlite,
    Postgres,
}

#[allow(dead_code)]
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageKind,
    pub sqlite: Option<SqliteConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SqliteConfig {
    pub path: PathBuf,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}
