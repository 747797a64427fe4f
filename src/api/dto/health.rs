//! DTOs for the health check endpoint.

use serde::{Deserialize, Serialize};

/// Data of a healthy response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthData {
    pub version: String,
    pub storage: String,
    pub links: usize,
}
