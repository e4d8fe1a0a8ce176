//! The shared library for Folio, the admin console of a portfolio site.
//!
//! Holds the BFF admin API client and its wire types, along with the
//! configuration, error, logging and UI helper macros used by the console and
//! the dev proxy.

pub mod admin;
pub mod api;
pub mod config;
pub mod data;
pub mod errors;
pub mod id;
pub mod log;
pub mod macros;
pub mod summary;

pub use api::{AdminClient, ApiClient, Envelope};
pub use config::ClientConfig;

pub use serde;
pub use serde_json;
pub use tracing;
