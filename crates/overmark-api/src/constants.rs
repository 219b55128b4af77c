//! Service-wide constants.

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "overmark";

/// Service version reported by the health endpoint.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");
