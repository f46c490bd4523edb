// ── Member reshaping ──

use clubwifi_api::membership::models::MemberRow;

use crate::model::member::Member;

/// Split a combined Vietnamese full name on its LAST space: everything
/// before is the family-name part (which may itself contain spaces --
/// "Nguyen Van An" is family "Nguyen Van", given "An"), everything after
/// is the given name. A name with no space yields two empty strings;
/// this never fails.
pub fn split_full_name(full_name: &str) -> (String, String) {
    match full_name.trim().rsplit_once(' ') {
        Some((surname, given_name)) => (surname.to_owned(), given_name.to_owned()),
        None => (String::new(), String::new()),
    }
}

/// Reshape a raw member row into the client-facing record.
///
/// The student id is copied into `username` (the upstream exposes no
/// separate login-username column yet), `HoTen` is split and removed,
/// and every other upstream field passes through unchanged.
pub fn reshape_member(row: MemberRow) -> Member {
    let (surname, given_name) = split_full_name(&row.full_name);
    Member {
        username: row.student_id.clone(),
        student_id: row.student_id,
        surname,
        given_name,
        extra: row.extra,
    }
}
