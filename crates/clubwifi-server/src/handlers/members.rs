// Member handlers -- thin proxies over the membership service, with the
// reshaping done in clubwifi-core.

use axum::extract::{Json, State};
use serde::Deserialize;
use tracing::info;

use clubwifi_api::membership::models::NewMemberRow;
use clubwifi_core::{Member, MemberDirectory, reshape_member};

use crate::error::AppError;
use crate::state::AppState;

/// Body naming just the member: `{"MSSV": "..."}`.
#[derive(Debug, Deserialize)]
pub struct StudentId {
    #[serde(rename = "MSSV")]
    pub student_id: String,
}

/// `GET /lay-so-luong-thanh-vien` -- member count as plain text.
pub async fn member_count(State(state): State<AppState>) -> Result<String, AppError> {
    let members = state.membership.list_members().await?;
    Ok(members.len().to_string())
}

/// `GET /lay-danh-sach-thanh-vien` -- the full member list, reshaped.
pub async fn member_list(
    State(state): State<AppState>,
) -> Result<Json<MemberDirectory>, AppError> {
    let rows = state.membership.list_members().await?;
    let members: Vec<Member> = rows.into_iter().map(reshape_member).collect();

    Ok(Json(MemberDirectory {
        member_count: members.len(),
        members,
    }))
}

/// `POST /lay-thong-tin-thanh-vien` -- one member by student id, reshaped.
pub async fn member_info(
    State(state): State<AppState>,
    Json(req): Json<StudentId>,
) -> Result<Json<Member>, AppError> {
    let row = state.membership.member_by_id(&req.student_id).await?;
    Ok(Json(reshape_member(row)))
}

/// `POST /them-thanh-vien` -- insert a member upstream.
pub async fn add_member(
    State(state): State<AppState>,
    Json(member): Json<NewMemberRow>,
) -> Result<&'static str, AppError> {
    state.membership.insert_member(&member).await?;

    info!(student_id = %member.student_id, "member added");
    Ok("Thêm thành viên thành công")
}

/// `POST /xoa-thanh-vien` -- delete a member upstream.
pub async fn remove_member(
    State(state): State<AppState>,
    Json(req): Json<StudentId>,
) -> Result<&'static str, AppError> {
    state.membership.delete_member(&req.student_id).await?;

    info!(student_id = %req.student_id, "member removed");
    Ok("Xóa thành viên thành công")
}
