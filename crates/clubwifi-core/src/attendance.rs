// ── Attendance classification ──
//
// Pure transformation of raw check-in rows into the classified report.
// Stateless: the same rows always yield the same report, so concurrent
// requests can share nothing and still agree.

use chrono::{NaiveDate, NaiveTime};

use clubwifi_api::membership::models::CheckinRow;

use crate::error::CoreError;
use crate::model::attendance::{AttendanceEntry, AttendanceReport};

/// Meetings open at 18:00; a check-in recorded strictly before this is a
/// premature badge-in and is excluded from the report entirely.
fn checkin_cutoff() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).expect("static time")
}

/// Check-ins strictly after this are flagged late.
fn late_threshold() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 30, 0).expect("static time")
}

/// Classify one date's raw check-in rows.
///
/// Per row: the combined timestamp loses everything but its date
/// component, the check-in time is parsed, rows before the cutoff are
/// dropped, rows after the late threshold are flagged. Surviving rows
/// keep their original relative order. Both boundaries are inclusive for
/// the "good" side: exactly 18:00:00 is retained, exactly 18:30:00 is
/// on time.
///
/// A malformed date or time fails the whole call -- the upstream is
/// trusted, so a bad field means something is wrong enough that partial
/// results would mislead.
pub fn classify_checkins(rows: Vec<CheckinRow>) -> Result<AttendanceReport, CoreError> {
    let mut entries = Vec::with_capacity(rows.len());
    let mut late_count = 0;

    for row in rows {
        let date = parse_record_date(&row.timestamp)?;
        let time = parse_record_time(&row.checkin_time)?;

        if time < checkin_cutoff() {
            continue;
        }

        let late = time > late_threshold();
        if late {
            late_count += 1;
        }

        entries.push(AttendanceEntry {
            student_id: row.student_id,
            full_name: row.full_name,
            date,
            time,
            late,
            extra: row.extra,
        });
    }

    Ok(AttendanceReport {
        present_count: entries.len(),
        late_count,
        entries,
    })
}

/// Date component of the combined timestamp (`2023-03-17T18:25:00`).
fn parse_record_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let text = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| CoreError::MalformedField {
        field: "ThoiGian",
        value: raw.to_owned(),
    })
}

fn parse_record_time(raw: &str) -> Result<NaiveTime, CoreError> {
    NaiveTime::parse_from_str(raw, "%H:%M:%S").map_err(|_| CoreError::MalformedField {
        field: "ThoiGianDiemDanh",
        value: raw.to_owned(),
    })
}
