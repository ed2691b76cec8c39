//! # Console Client
//!
//! HTTP access to the entity backend.
//!
//! ## Endpoints
//!
//! | Path | Body |
//! |------|------|
//! | `/entity/add` | `{entityname, fields}` |
//! | `/entity/insertdemo` | `{entityname, ntuples, ndims, fields}` |
//! | `/entity/indexall` | `{entityname, fields}` |
//!
//! Every endpoint answers with `{code, message}`.
//!

pub mod backend;
pub mod config;
pub mod error;

pub use backend::{Backend, HttpBackend};
pub use config::{ClientConfig, ConfigFile, DEFAULT_BASE_URL, ENV_BASE_URL, ENV_TIMEOUT_SECS};
pub use error::ClientError;
