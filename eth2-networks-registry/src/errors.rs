use std::env::VarError;

/// Error produced when resolving network parameters.
///
/// An [`NetworkError::UnknownNetwork`] means the process was configured for a
/// network this library does not support. It is not meant to be retried or worked
/// around: callers should treat it as fatal and abort startup.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("undefined network: {0:?}")]
    UnknownNetwork(String),
    #[error(transparent)]
    EnvVar(#[from] VarError),
}

pub type Result<T, E = NetworkError> = std::result::Result<T, E>;
