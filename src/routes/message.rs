use crate::models::MessageResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Message Endpoint
///
/// Returns the fixed message together with the current server time.
///
/// ## Response
///
/// - **200 OK**
///   - Body: JSON object with `message` and `timestamp` (Unix seconds, UTC)
///
/// ## Example Response
///
/// ```json
/// {
///   "message": "Automate none of the things!",
///   "timestamp": 1760000000
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/message",
    tag = "Message",
    responses((status = 200, description = "Fixed message with server time", body = MessageResponse))
)]
#[get("/api/message")]
pub async fn message() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::now())
}

/// # Route Configuration
///
/// - `GET /api/message`: message endpoint
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(message);
}
