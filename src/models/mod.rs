/// # Health Status Response
///
/// Body returned by the liveness and readiness probes.
///
/// ## Fields
/// - `status`: always `"pass"`; no degraded state is modelled
///
/// ## Example JSON
/// ```json
/// { "status": "pass" }
/// ```
pub mod health;

/// # Message Response
///
/// Body returned by `GET /api/message`: a fixed message and the server's
/// Unix time in whole seconds.
///
/// ## Example JSON
/// ```json
/// {
///   "message": "Automate none of the things!",
///   "timestamp": 1760000000
/// }
/// ```
pub mod message;

pub use health::HealthStatus;
pub use message::MessageResponse;
