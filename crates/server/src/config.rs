//! Host configuration, read from the environment

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = ".todo-data";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8081";

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    /// Serve the categorized widget; off means everything lands in the default category
    pub categories_enabled: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = std::env::var("TODO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let raw_addr =
            std::env::var("TODO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid TODO_BIND_ADDR {:?}: {}", raw_addr, e))?;

        Ok(Self {
            data_dir,
            bind_addr,
            categories_enabled: feature_categories(),
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => parse_flag(&raw).unwrap_or(default),
        Err(_) => default,
    }
}

pub fn feature_categories() -> bool {
    env_flag("FEATURE_CATEGORIES", true)
}
