// clubwifi-core: Domain models and the classification/reshaping logic
// sitting between clubwifi-api and the HTTP layer.

pub mod attendance;
pub mod classify;
pub mod convert;
pub mod error;
pub mod member;
pub mod model;

// ── Primary re-exports ──────────────────────────────────────────────
pub use attendance::classify_checkins;
pub use classify::{ERROR_RULES, UNRECOGNIZED_REASON, classify};
pub use error::CoreError;
pub use member::{reshape_member, split_full_name};

// Re-export model types at the crate root for ergonomics.
pub use model::{
    AttendanceEntry, AttendanceReport, HotspotAccount, HotspotCredential, Member, MemberDirectory,
};
