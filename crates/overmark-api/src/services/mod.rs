//! Outbound service clients.

pub mod fetch;
