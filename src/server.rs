use crate::config::ServerConfig;
use crate::error::StartupError;
use crate::routes;
use actix_web::dev::Server;
use actix_web::{
    App, HttpServer,
    middleware::{Logger, NormalizePath},
};

/// Builds the HTTP server and binds its listener.
///
/// The returned [`Server`] is already listening but does nothing until it is
/// awaited. A bind failure is returned as [`StartupError::Bind`]; there is no
/// retry and no fallback port.
///
/// Trailing slashes are trimmed before routing, so `/healthz/` reaches the
/// liveness probe. Path matching stays case-sensitive.
pub fn build(config: &ServerConfig) -> Result<Server, StartupError> {
    let addr = config.bind_address();

    let server = HttpServer::new(|| {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))
    .map_err(|source| StartupError::Bind {
        addr: addr.clone(),
        source,
    })?
    .run();

    tracing::info!(%addr, "listening");
    Ok(server)
}

/// Binds and serves until the server is stopped.
pub async fn run(config: ServerConfig) -> Result<(), StartupError> {
    build(&config)?.await?;
    Ok(())
}
