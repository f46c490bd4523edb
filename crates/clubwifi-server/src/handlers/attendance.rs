// Attendance handlers.
//
// Same report through two entry points: the date in the path (GET) or
// in the body (POST) -- the portal frontend has used both over the
// years, and both stay supported.

use axum::extract::{Json, Path, State};
use serde::Deserialize;
use tracing::info;

use clubwifi_core::{AttendanceReport, classify_checkins};

use crate::error::AppError;
use crate::state::AppState;

/// Body for the POST variant: `{"Date": "..."}`.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    #[serde(rename = "Date")]
    pub date: String,
}

/// `GET /lay-danh-sach-dang-nhap/{date}`
pub async fn by_date_path(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<AttendanceReport>, AppError> {
    report(&state, &date).await
}

/// `POST /lay-danh-sach-dang-nhap`
pub async fn by_date_body(
    State(state): State<AppState>,
    Json(req): Json<DateQuery>,
) -> Result<Json<AttendanceReport>, AppError> {
    report(&state, &req.date).await
}

/// Fetch the raw check-ins for `date` and classify them. The date text
/// is passed through to the upstream verbatim.
async fn report(state: &AppState, date: &str) -> Result<Json<AttendanceReport>, AppError> {
    info!(%date, "attendance list requested");

    let rows = state.membership.attendance_by_date(date).await?;
    let report = classify_checkins(rows)?;

    Ok(Json(report))
}
