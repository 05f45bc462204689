//! Keel Connection - Saved connections and credential storage
//!
//! This crate manages connection profiles, their on-disk persistence, and
//! keychain-backed password storage.

mod config;
pub mod naming;
pub mod paths;
mod preview;
mod secrets;
mod store;

pub use config::SavedConnection;
pub use preview::{ConnectionPreview, PreviewChip};
pub use secrets::{SecretRef, SecretStore};
pub use store::ConnectionStore;
