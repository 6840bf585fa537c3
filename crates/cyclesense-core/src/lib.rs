//! Cyclesense Core: shared errors, configuration, and readiness state.
//!
//! This crate has no internal Cyclesense dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Layered service configuration
//! - [`status`]: Readiness handle shared by the HTTP layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod status;

pub use config::Config;
pub use error::{Error, Result};
pub use status::{SystemHandle, SystemState};
