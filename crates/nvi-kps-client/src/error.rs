//! KPS Public client error types.

use nvi_core::ValidationError;

/// Errors from KPS Public verification operations.
#[derive(Debug, thiserror::Error)]
pub enum KpsError {
    /// One of the four input checks failed. No network call was attempted.
    #[error(transparent)]
    InvalidInput(#[from] ValidationError),

    /// KPS service is unreachable, rejected the exchange, or returned a
    /// non-success status.
    #[error("KPS service unavailable: {reason}")]
    ServiceUnavailable {
        /// Human-readable description of the outage or error.
        reason: String,
    },

    /// The request to KPS timed out.
    #[error("KPS request timed out after {elapsed_ms}ms")]
    Timeout {
        /// Elapsed time in milliseconds before the timeout triggered.
        elapsed_ms: u64,
    },

    /// A response was received but could not be understood: unreadable
    /// body, no single `TCKimlikNoDogrulaResult` element, or a result
    /// text that is not a boolean.
    #[error("malformed KPS response: {reason}")]
    MalformedResponse {
        /// Description of the parse anomaly.
        reason: String,
    },

    /// The adapter has not been configured correctly.
    #[error("KPS adapter not configured: {reason}")]
    NotConfigured {
        /// Why configuration is missing or incomplete.
        reason: String,
    },
}

impl KpsError {
    /// Whether this error means the verification outcome could not be
    /// determined (transport or parse failure), as opposed to the caller
    /// supplying invalid input.
    ///
    /// The reference implementation collapses every indeterminate outcome
    /// into a `false` verification result; see
    /// [`KpsPublicAdapter::verify_lenient`](crate::kps::KpsPublicAdapter::verify_lenient).
    pub fn is_indeterminate(&self) -> bool {
        !matches!(self, Self::InvalidInput(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_is_not_indeterminate() {
        let err = KpsError::InvalidInput(ValidationError::FirstNameRequired);
        assert!(!err.is_indeterminate());
    }

    #[test]
    fn transport_and_parse_errors_are_indeterminate() {
        let errs = [
            KpsError::ServiceUnavailable {
                reason: "connection refused".into(),
            },
            KpsError::Timeout { elapsed_ms: 5000 },
            KpsError::MalformedResponse {
                reason: "no result element".into(),
            },
            KpsError::NotConfigured {
                reason: "bad endpoint".into(),
            },
        ];
        for err in errs {
            assert!(err.is_indeterminate(), "{err} should be indeterminate");
        }
    }

    #[test]
    fn invalid_input_display_is_transparent() {
        let err = KpsError::InvalidInput(ValidationError::LastNameRequired);
        assert_eq!(err.to_string(), "last name required");
    }

    #[test]
    fn error_display_messages() {
        let err = KpsError::ServiceUnavailable {
            reason: "HTTP 503".into(),
        };
        assert!(err.to_string().contains("HTTP 503"));

        let err = KpsError::Timeout { elapsed_ms: 3000 };
        assert!(err.to_string().contains("3000"));

        let err = KpsError::MalformedResponse {
            reason: "duplicate result element".into(),
        };
        assert!(err.to_string().contains("duplicate result element"));
    }
}
