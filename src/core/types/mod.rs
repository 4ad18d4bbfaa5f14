use serde::{Deserialize, Serialize};

/// Status assigned to failures absorbed inside an adapter (transport or
/// protocol). Indistinguishable at the status level from a vendor 500.
pub const LOCAL_FAILURE_STATUS: u16 = 500;

/// Classifies a failed translation so callers can branch without comparing
/// status codes against magic numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The vendor answered the request with a non-200 status.
    Vendor,
    /// The request never completed: connect failure, timeout, or a broken
    /// body read.
    Transport,
    /// The response body could not be decoded as a translation payload.
    Protocol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Outcome {
    Translated,
    Failed { kind: FailureKind },
}

/// Normalized result of one translation call.
///
/// `text` is never empty for a non-empty input: it holds the translated text
/// on success and echoes the original input on every failure path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslationResult {
    pub text: String,
    pub status: u16,
    pub source: String,
    pub target: String,
    pub outcome: Outcome,
}

impl TranslationResult {
    /// Vendor answered 200 with a decodable body.
    pub fn translated(text: impl Into<String>, source: &str, target: &str) -> Self {
        Self {
            text: text.into(),
            status: 200,
            source: source.to_string(),
            target: target.to_string(),
            outcome: Outcome::Translated,
        }
    }

    /// Vendor answered with a non-200 status; the status passes through
    /// unchanged and `text` carries whatever the body yielded.
    pub fn rejected(text: impl Into<String>, status: u16, source: &str, target: &str) -> Self {
        Self {
            text: text.into(),
            status,
            source: source.to_string(),
            target: target.to_string(),
            outcome: Outcome::Failed {
                kind: FailureKind::Vendor,
            },
        }
    }

    /// Failure absorbed locally: sentinel status, original input echoed back.
    pub fn failed(kind: FailureKind, original_text: &str, source: &str, target: &str) -> Self {
        Self {
            text: original_text.to_string(),
            status: LOCAL_FAILURE_STATUS,
            source: source.to_string(),
            target: target.to_string(),
            outcome: Outcome::Failed { kind },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Translated)
    }
}
