//! Error types for wallet and codec operations

use thiserror::Error;

/// Errors surfaced by [`crate::Wallet`] operations.
///
/// A missing label and an undecodable entry are always distinct variants, so
/// callers can tell "never stored" apart from "stored but corrupt".
#[derive(Error, Debug)]
pub enum WalletError {
    /// No identity is stored under the label
    #[error("label doesn't exist: {0}")]
    NotFound(String),

    /// Label is empty or whitespace-only
    #[error("Invalid label: {0:?}")]
    InvalidLabel(String),

    /// Stored elements could not be turned back into an identity
    #[error("Failed to decode identity '{label}': {source}")]
    DecodeFailure {
        label: String,
        #[source]
        source: CodecError,
    },

    /// Identity could not be represented by the configured codec
    #[error("Failed to encode identity '{label}': {source}")]
    EncodeFailure {
        label: String,
        #[source]
        source: CodecError,
    },
}

/// Errors raised by an [`crate::IdentityCodec`].
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Unsupported identity type: expected {expected}, found {found}")]
    UnsupportedType { expected: String, found: String },

    #[error("Invalid element '{name}': {reason}")]
    InvalidElement { name: String, reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodecError {
    pub fn invalid_element(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidElement {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl WalletError {
    /// True when the error means the label is simply absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_label() {
        let err = WalletError::NotFound("alice".to_string());
        assert_eq!(err.to_string(), "label doesn't exist: alice");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_decode_failure_keeps_source() {
        let err = WalletError::DecodeFailure {
            label: "bob".to_string(),
            source: CodecError::MissingElement("mspId".to_string()),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("bob"));
        assert!(err.to_string().contains("mspId"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
