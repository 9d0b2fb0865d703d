use message_service::config::ServerConfig;
use message_service::{server, telemetry};
use std::process::ExitCode;

/// Message Service Entry Point
///
/// Loads the `.env` file (if present), installs the tracing subscriber and
/// runs the Actix-web HTTP server until the process is stopped.
///
/// # Endpoints
/// - Liveness: `GET /healthz`
/// - Readiness: `GET /readyz`
/// - Message: `GET /api/message`
///
/// # Configuration
/// - Server binds to `0.0.0.0:8080` unless `HOST` / `PORT` are set
/// - Log filter taken from `RUST_LOG`
///
/// Any startup failure (bad `PORT`, address already in use) terminates the
/// process with a non-zero exit code.
#[actix_web::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let result = match ServerConfig::from_env() {
        Ok(config) => server::run(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
