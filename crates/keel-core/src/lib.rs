//! Keel Core - connection descriptors and connection-string processing
//!
//! This crate is the pure heart of Keel's connection handling. It defines:
//!
//! - `ConnectionDescriptor` - structured form of a PostgreSQL connection URL
//! - `conn_str` - parsing, validation, normalization, and serialization of
//!   connection strings
//! - `KeelError` - the shared error type for the rest of the workspace
//!
//! Nothing in here performs I/O; every operation is a deterministic function
//! of its input.

pub mod conn_str;
mod descriptor;
mod error;

pub use conn_str::{ParseError, Validation};
pub use descriptor::ConnectionDescriptor;
pub use error::{KeelError, Result};
