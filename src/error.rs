use thiserror::Error;

/// Fatal errors raised while bringing the HTTP server up.
///
/// Request handlers have no error path of their own, so this is the only
/// error type in the crate. Every variant ends the process.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server terminated with an I/O error: {0}")]
    Runtime(#[from] std::io::Error),
}
