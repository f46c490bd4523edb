// ── Member domain types ──

use serde::Serialize;

/// A reshaped member record: the combined `HoTen` is split into `Ho` and
/// `Ten`, and the student id doubles as the login `username` (the
/// upstream has no separate username column yet). Everything else the
/// upstream sent passes through unchanged in `extra`.
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    pub username: String,
    #[serde(rename = "MSSV")]
    pub student_id: String,
    #[serde(rename = "Ho")]
    pub surname: String,
    #[serde(rename = "Ten")]
    pub given_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The full member list with its count.
#[derive(Debug, Clone, Serialize)]
pub struct MemberDirectory {
    #[serde(rename = "SoLuongThanhVien")]
    pub member_count: usize,
    #[serde(rename = "DanhSachThanhVien")]
    pub members: Vec<Member>,
}
