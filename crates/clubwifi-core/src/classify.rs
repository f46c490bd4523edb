// ── Failure-reason classification ──
//
// Raw failure text from the router or the membership API is unreadable
// for portal users ("no such command prefix", tracebacks, envelope
// noise). This module maps the known failure modes to fixed reasons via
// an ordered rule table. The table IS the policy: order is significant,
// first match wins.

/// One classification rule: a substring searched for in the raw failure
/// text, and the fixed reason shown when it matches.
#[derive(Debug, Clone, Copy)]
pub struct ErrorRule {
    pub pattern: &'static str,
    pub reason: &'static str,
}

/// Known failure modes, in match-priority order.
///
/// Patterns 1-5 are RouterOS command errors, 6 is the socket error seen
/// when the router host itself is wrong, 7 is the membership API's
/// missing-envelope-key symptom of a rejected token.
pub const ERROR_RULES: &[ErrorRule] = &[
    ErrorRule {
        pattern: "invalid username or password",
        reason: "wrong username or password",
    },
    ErrorRule {
        pattern: "unknown host IP",
        reason: "IP address does not exist",
    },
    ErrorRule {
        pattern: "invalid value for argument ip",
        reason: "invalid IP address",
    },
    ErrorRule {
        pattern: "wrong MAC provided",
        reason: "wrong MAC address",
    },
    ErrorRule {
        pattern: "invalid value of mac-address",
        reason: "invalid MAC address",
    },
    ErrorRule {
        pattern: "actively refused",
        reason: "wrong router hostname or IP",
    },
    ErrorRule {
        pattern: "'Data'",
        reason: "invalid/expired token",
    },
];

/// Reason returned when no rule matches. Never empty.
pub const UNRECOGNIZED_REASON: &str = "unrecognized error";

/// Map a raw failure message to a fixed human-readable reason.
///
/// Scans every rule in table order and returns the reason of the first
/// whose pattern occurs in `raw`; falls back to [`UNRECOGNIZED_REASON`]
/// only when none match. Absence of a match is not an error.
pub fn classify(raw: &str) -> &'static str {
    ERROR_RULES
        .iter()
        .find(|rule| raw.contains(rule.pattern))
        .map_or(UNRECOGNIZED_REASON, |rule| rule.reason)
}
