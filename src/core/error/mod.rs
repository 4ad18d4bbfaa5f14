use thiserror::Error;

use crate::core::types::FailureKind;

/// Construction-time misconfiguration. Fatal to the adapter instance being
/// built; never raised per call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing credential for {service}: set {key}")]
    MissingCredential { service: String, key: String },
    #[error("credential for {service} is not a valid header value")]
    InvalidCredential { service: String },
    #[error("invalid timeout: {timeout_ms} ms")]
    InvalidTimeout { timeout_ms: u64 },
}

/// Per-call failure. Adapters absorb these into the result status and
/// outcome tag; they never cross the public `translate` boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("transport error [service={service}]: {message}")]
    Transport { service: String, message: String },
    #[error("serialization error [service={service}]: {message}")]
    Serialization { service: String, message: String },
    #[error("protocol error [service={service}]: {message}")]
    Protocol { service: String, message: String },
}

impl TranslateError {
    /// Outcome tag for a result built from this error.
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Self::Transport { .. } => FailureKind::Transport,
            Self::Serialization { .. } | Self::Protocol { .. } => FailureKind::Protocol,
        }
    }
}

#[cfg(test)]
mod tests;
