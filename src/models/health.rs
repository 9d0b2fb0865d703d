use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STATUS_PASS: &str = "pass";

/// # Health Status Response
///
/// Shared by `/healthz` and `/readyz`. Readiness does not probe any
/// downstream dependency, so both report the same passing status.
///
/// ## Example JSON
/// ```json
/// { "status": "pass" }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "pass")]
    pub status: String,
}

impl HealthStatus {
    pub fn pass() -> Self {
        Self {
            status: STATUS_PASS.to_string(),
        }
    }
}
