//! Overmark API library
//!
//! HTTP surface of the overlay service: handlers, error conversion, remote
//! fetch, and application setup.

pub mod constants;
pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;

pub use error::ErrorResponse;
