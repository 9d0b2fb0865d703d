use crate::models::HealthStatus;
use actix_web::{HttpResponse, Responder, get};

/// # Liveness Probe
///
/// ## Response
///
/// - **200 OK**: process is up and serving requests
///   - Body: `{"status": "pass"}`
#[utoipa::path(
    get,
    path = "/healthz",
    tag = "Health Check",
    responses((status = 200, description = "Service is alive", body = HealthStatus))
)]
#[get("/healthz")]
pub async fn liveness() -> impl Responder {
    tracing::debug!("liveness probe");
    HttpResponse::Ok().json(HealthStatus::pass())
}

/// # Readiness Probe
///
/// Same body as the liveness probe. No downstream dependency is checked.
#[utoipa::path(
    get,
    path = "/readyz",
    tag = "Health Check",
    responses((status = 200, description = "Service is ready for traffic", body = HealthStatus))
)]
#[get("/readyz")]
pub async fn readiness() -> impl Responder {
    tracing::debug!("readiness probe");
    HttpResponse::Ok().json(HealthStatus::pass())
}

/// # Route Configuration
///
/// - `GET /healthz`: liveness probe
/// - `GET /readyz`: readiness probe
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(liveness).service(readiness);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn test_liveness_endpoint() {
        // Set up test app
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/healthz").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let health: HealthStatus = test::read_body_json(resp).await;
        assert_eq!(health.status, "pass");
    }

    #[actix_web::test]
    async fn test_readiness_endpoint() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/readyz").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let health: HealthStatus = test::read_body_json(resp).await;
        assert_eq!(health, HealthStatus::pass());
    }

    #[actix_web::test]
    async fn test_liveness_rejects_post() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::post().uri("/healthz").to_request();
        let resp = test::call_service(&app, req).await;

        assert_ne!(resp.status(), StatusCode::OK);
    }
}
