// ── Attendance domain types ──

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One classified check-in: the raw combined timestamp is gone, replaced
/// by its date component plus the parsed check-in time and the late flag.
/// Unmodeled upstream fields ride along in `extra`.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceEntry {
    #[serde(rename = "MSSV")]
    pub student_id: String,
    #[serde(rename = "HoTen")]
    pub full_name: String,
    #[serde(rename = "Ngay")]
    pub date: NaiveDate,
    #[serde(rename = "Gio")]
    pub time: NaiveTime,
    #[serde(rename = "DiTre")]
    pub late: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// The classified attendance list for one date, with summary counts.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceReport {
    #[serde(rename = "SoLuongCoMat")]
    pub present_count: usize,
    #[serde(rename = "SoLuongTre")]
    pub late_count: usize,
    #[serde(rename = "DanhSachCoMat")]
    pub entries: Vec<AttendanceEntry>,
}
