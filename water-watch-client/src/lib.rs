//! HTTP client and credential handling for the Water Watch service
//!
//! This crate owns the two external collaborators of the dashboard core:
//! the credential token (decoded locally, never verified client-side) and
//! the remote environments API. [`api::WaterWatchApi`] implements the
//! core's `EnvironmentSource` seam.

pub mod api;
pub mod config;
pub mod error;
pub mod token;

pub use api::WaterWatchApi;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use token::{user_id_from_token, user_id_if_present};
