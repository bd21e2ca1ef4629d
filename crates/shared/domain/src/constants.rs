//! Domain-level constants.
//!
//! These constants define the service's public contract.

// =============================================================================
// Service identity
// =============================================================================

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "golang-app";

/// Status reported by the health endpoint while the process is serving
pub const HEALTH_STATUS_HEALTHY: &str = "healthy";

// =============================================================================
// Storage
// =============================================================================

/// Collection holding user records
pub const USERS_COLLECTION: &str = "users";
