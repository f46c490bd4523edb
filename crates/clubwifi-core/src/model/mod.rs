pub mod attendance;
pub mod hotspot;
pub mod member;

pub use attendance::{AttendanceEntry, AttendanceReport};
pub use hotspot::{HotspotAccount, HotspotCredential};
pub use member::{Member, MemberDirectory};
