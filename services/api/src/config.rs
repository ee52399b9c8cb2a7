use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use marquee_dataset::DatasetPaths;

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub public_url: String,
    pub log_level: String,
    pub dataset: DatasetPaths,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let listen_addr = lookup("MARQUEE_LISTEN_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8000".to_string())
            .parse()
            .context("MARQUEE_LISTEN_ADDR must be a socket address (host:port).")?;

        let public_url = lookup("MARQUEE_PUBLIC_URL")
            .unwrap_or_else(|| "http://localhost:8000".to_string())
            .trim_end_matches('/')
            .to_string();

        let log_level = lookup("MARQUEE_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let data_dir = lookup("MARQUEE_DATA_DIR").unwrap_or_else(|| "data".to_string());
        let mut dataset = DatasetPaths::in_dir(&data_dir);
        if let Some(path) = lookup("MARQUEE_CAST_FILE") {
            dataset.cast = PathBuf::from(path);
        }
        if let Some(path) = lookup("MARQUEE_RETURNS_FILE") {
            dataset.returns = PathBuf::from(path);
        }
        if let Some(path) = lookup("MARQUEE_DIRECTORY_FILE") {
            dataset.directory = PathBuf::from(path);
        }

        Ok(Self {
            listen_addr,
            public_url,
            log_level,
            dataset,
        })
    }
}
