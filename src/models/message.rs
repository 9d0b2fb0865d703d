use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MESSAGE: &str = "Automate none of the things!";

/// # Message Response
///
/// ## Fields
/// - `message`: the fixed string [`MESSAGE`]
/// - `timestamp`: seconds since the Unix epoch (UTC), read when the response
///   is built
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Automate none of the things!")]
    pub message: String,
    #[schema(example = 1760000000)]
    pub timestamp: i64,
}

impl MessageResponse {
    /// Reads the system clock once. Nothing is cached between calls.
    pub fn now() -> Self {
        Self::at(Utc::now().timestamp())
    }

    pub fn at(timestamp: i64) -> Self {
        Self {
            message: MESSAGE.to_string(),
            timestamp,
        }
    }
}
