// ── Core error types ──
//
// User-facing errors from clubwifi-core. Consumers never see reqwest
// errors or JSON parse failures directly -- the `From<clubwifi_api::Error>`
// impl translates transport-layer errors into domain-appropriate
// variants, keeping the raw failure text available for classification.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Raw failure from a remote collaborator (router or membership API).
    ///
    /// `message` is the full failure text including the cause chain;
    /// callers run it through [`crate::classify`] before showing it.
    #[error("{message}")]
    Remote { message: String },

    // ── Not-found ────────────────────────────────────────────────────
    #[error("hotspot account not found: {username}")]
    AccountNotFound { username: String },

    #[error("member not found: {student_id}")]
    MemberNotFound { student_id: String },

    // ── Data errors ──────────────────────────────────────────────────
    /// A record field from a trusted upstream failed to parse. This fails
    /// the whole call -- no partial results are emitted.
    #[error("malformed {field}: {value:?}")]
    MalformedField { field: &'static str, value: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<clubwifi_api::Error> for CoreError {
    fn from(err: clubwifi_api::Error) -> Self {
        match err {
            clubwifi_api::Error::AccountNotFound { username } => {
                CoreError::AccountNotFound { username }
            }
            clubwifi_api::Error::MemberNotFound { student_id } => {
                CoreError::MemberNotFound { student_id }
            }
            other => CoreError::Remote {
                message: other.raw_message(),
            },
        }
    }
}
