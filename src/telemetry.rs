use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,actix_web=info";

/// Installs the global tracing subscriber.
///
/// The filter is read from `RUST_LOG`, falling back to `info`. Access-log
/// lines from `actix_web::middleware::Logger` go through the `log` facade and
/// are forwarded into the same subscriber.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second call (e.g. from tests) leaves the first subscriber in place.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        assert!(tracing::dispatcher::has_been_set());

        init_tracing();
        assert!(tracing::dispatcher::has_been_set());
    }
}
