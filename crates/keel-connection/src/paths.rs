//! Per-user storage locations

use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .context("Could not determine data directory")
        .map(|p| p.join("keel"))
}

pub fn connections_file() -> Result<PathBuf> {
    data_dir().map(|p| p.join("connections.json"))
}
