//! Core domain models and view state for the Water Watch dashboard client
//!
//! This crate contains the environment domain model, the chart-ready
//! aggregation logic, and the transient dashboard view state shared by the
//! Water Watch client crates. It performs no I/O; fetching is abstracted
//! behind the [`view::EnvironmentSource`] trait.

pub mod aggregate;
pub mod environment;
pub mod error;
pub mod view;

pub use error::{Error, Result};
