use actix_web::web;

/// # Health Probes
///
/// Liveness (`GET /healthz`) and readiness (`GET /readyz`) checks. Both
/// always answer `200 OK` with:
///
/// ```json
/// { "status": "pass" }
/// ```
pub mod health;

/// # Message Endpoint
///
/// `GET /api/message` returns a fixed message and the current Unix time.
///
/// ## Example Response
/// ```json
/// { "message": "Automate none of the things!", "timestamp": 1760000000 }
/// ```
pub mod message;


/// # Route Table
///
/// Registers every endpoint of the service. Paths are mounted at the root,
/// not under a versioned scope, so probes stay stable for orchestrators.
///
/// ```text
/// GET /healthz     - liveness probe
/// GET /readyz      - readiness probe
/// GET /api/message - message with server timestamp
/// ```
///
/// Anything else falls through to Actix-web's default `404 Not Found`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(message::configure_routes);
}
