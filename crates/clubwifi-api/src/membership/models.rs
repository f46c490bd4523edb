// Raw wire types for the membership API.
//
// Field keys are the upstream's Vietnamese spellings; anything beyond the
// modeled fields flows through `extra` untouched so the reshaped output
// can preserve it.

use serde::{Deserialize, Serialize};

/// One check-in row from `CLB_DiemDanh_Select_byDate`.
///
/// `timestamp` is a combined date-time (`2023-03-17T18:25:00`);
/// `checkin_time` is the time-of-day the card reader recorded
/// (`18:25:00`). Both stay as text here -- parsing and classification
/// happen in `clubwifi-core`.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckinRow {
    #[serde(rename = "MSSV")]
    pub student_id: String,
    #[serde(rename = "HoTen")]
    pub full_name: String,
    #[serde(rename = "ThoiGian")]
    pub timestamp: String,
    #[serde(rename = "ThoiGianDiemDanh")]
    pub checkin_time: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One member row from the member-select endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberRow {
    #[serde(rename = "MSSV")]
    pub student_id: String,
    #[serde(rename = "HoTen")]
    pub full_name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body for `CLB_ThanhVien_Insert`.
///
/// Explicit named optional fields -- the upstream tolerates missing keys,
/// so `None` fields are simply omitted from the JSON. Deserializable too:
/// the HTTP layer accepts the same shape from portal admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMemberRow {
    #[serde(rename = "MSSV")]
    pub student_id: String,
    #[serde(rename = "HoTen")]
    pub full_name: String,
    #[serde(rename = "NgaySinh", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(rename = "Lop", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(rename = "Email", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "SDT", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
