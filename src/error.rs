use std::io;
use thiserror::Error;

/// Everything a caller can get back from an [`OutputController`](crate::OutputController).
#[derive(Debug, Error)]
pub enum OutputError {
    /// No board session: the host address is missing, or the controller has no handle.
    #[error("not connected to a board")]
    NotConnected,

    #[error("failed to reach output service at {addr}: {reason}")]
    ConnectFailed { addr: String, reason: String },

    #[error("output service `{identity}` is not offered by this board")]
    ServiceUnavailable { identity: String },

    #[error("connection to output service lost: {0}")]
    ConnectionLost(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Failure of the remote lookup that turns a service identity into a handle.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("object `{0}` does not exist")]
    ObjectNotExist(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("protocol mismatch: {0}")]
    Protocol(String),
}
