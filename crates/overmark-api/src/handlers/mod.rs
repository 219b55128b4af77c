//! HTTP request handlers.

pub mod health;
pub mod overlay;
