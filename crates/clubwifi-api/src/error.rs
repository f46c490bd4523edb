use thiserror::Error;

/// Top-level error type for the `clubwifi-api` crate.
///
/// Covers every failure mode across both remote surfaces: router
/// authentication, HTTP transport, RouterOS command errors, and the
/// membership API envelope. `clubwifi-core` maps these into
/// domain-appropriate variants before they reach a caller.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The router rejected the API credentials (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── RouterOS ────────────────────────────────────────────────────
    /// Command error from the RouterOS REST API.
    ///
    /// `message` carries the raw `detail` text from the error body
    /// verbatim -- downstream classification matches on it.
    #[error("RouterOS error: {message}")]
    RouterApi { message: String },

    /// No hotspot user with the given name exists on the router.
    #[error("hotspot account not found: {username}")]
    AccountNotFound { username: String },

    // ── Membership API ──────────────────────────────────────────────
    /// Non-success HTTP status from the membership API.
    #[error("Membership API error (HTTP {status}): {message}")]
    Membership { status: u16, message: String },

    /// The membership response parsed but had no `'Data'` key.
    ///
    /// The upstream omits the key when the auth token is rejected or
    /// expired, so this is surfaced as its own variant rather than a
    /// generic deserialization failure.
    #[error("membership response is missing the 'Data' key")]
    MissingData { body: String },

    /// No member row came back for the requested student id.
    #[error("member not found: {student_id}")]
    MemberNotFound { student_id: String },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

/// Truncate a response body for error messages without splitting a
/// UTF-8 sequence -- upstream bodies are routinely Vietnamese text.
pub(crate) fn preview(body: &str) -> &str {
    match body.char_indices().nth(200) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

impl Error {
    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AccountNotFound { .. } | Self::MemberNotFound { .. }
        )
    }

    /// Full failure text including the source chain.
    ///
    /// `reqwest`'s `Display` hides the underlying cause ("error sending
    /// request"), but classification needs the cause text -- walk the
    /// chain and join every layer into one string.
    pub fn raw_message(&self) -> String {
        use std::error::Error as _;

        let mut msg = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            msg.push_str(": ");
            msg.push_str(&cause.to_string());
            source = cause.source();
        }
        msg
    }
}
