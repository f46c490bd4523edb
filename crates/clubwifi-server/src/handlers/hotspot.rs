// Hotspot login and router-account handlers.
//
// Every failure from the router is surfaced as `AppError::Remote`, so
// the response body is the classified reason rather than RouterOS noise.

use axum::extract::{Json, State};
use serde::Deserialize;
use tracing::info;

use clubwifi_api::router::models::{
    HotspotLoginParams, HotspotUser, HotspotUserPatch, NewHotspotUser,
};
use clubwifi_core::{HotspotAccount, HotspotCredential};

use crate::error::AppError;
use crate::state::AppState;

/// Body naming just the account: `{"user": "..."}`.
#[derive(Debug, Deserialize)]
pub struct AccountName {
    #[serde(rename = "user")]
    pub username: String,
}

/// Body for `/doi-mat-khau`.
#[derive(Debug, Deserialize)]
pub struct PasswordChange {
    #[serde(rename = "user")]
    pub username: String,
    pub password: String,
}

/// `POST /login` -- push a portal client into the router's session table.
pub async fn login(
    State(state): State<AppState>,
    Json(credential): Json<HotspotCredential>,
) -> Result<&'static str, AppError> {
    info!(user = %credential.username, ip = %credential.ip_address, "login request received");

    let params = HotspotLoginParams::from(&credential);
    state.router.login(&params).await?;

    info!(user = %credential.username, "login successful");
    Ok("Login thành công")
}

/// `GET /lay-danh-sach-user` -- every hotspot account on the router,
/// proxied as the router reports it.
pub async fn account_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<HotspotUser>>, AppError> {
    let users = state.router.list_users().await?;
    Ok(Json(users))
}

/// `POST /tao-user` -- create a hotspot account on the router.
pub async fn create_account(
    State(state): State<AppState>,
    Json(account): Json<HotspotAccount>,
) -> Result<&'static str, AppError> {
    let user = NewHotspotUser::from(&account);
    state.router.create_user(&user).await?;

    info!(user = %account.username, "hotspot account created");
    Ok("Tạo tài khoản thành công")
}

/// `POST /xoa-tai-khoan` -- remove a hotspot account by name.
pub async fn remove_account(
    State(state): State<AppState>,
    Json(req): Json<AccountName>,
) -> Result<&'static str, AppError> {
    state.router.remove_user(&req.username).await?;

    info!(user = %req.username, "hotspot account removed");
    Ok("Xóa tài khoản thành công")
}

/// `POST /lay-user-id` -- the router's internal id for an account.
pub async fn account_id(
    State(state): State<AppState>,
    Json(req): Json<AccountName>,
) -> Result<String, AppError> {
    let id = state.router.find_user_id(&req.username).await?;
    Ok(id)
}

/// `POST /doi-mat-khau` -- change one account's password, touching
/// nothing else.
pub async fn change_password(
    State(state): State<AppState>,
    Json(req): Json<PasswordChange>,
) -> Result<&'static str, AppError> {
    let patch = HotspotUserPatch {
        password: Some(req.password),
        ..HotspotUserPatch::default()
    };
    state.router.update_user(&req.username, &patch).await?;

    info!(user = %req.username, "password changed");
    Ok("Đổi mật khẩu thành công")
}

/// `POST /chinh-sua-thanh-vien` -- update the router account paired with
/// a member (password, profile, linkage comment). The membership service
/// has no update operation, so edits land on the router side.
pub async fn edit_account(
    State(state): State<AppState>,
    Json(account): Json<HotspotAccount>,
) -> Result<&'static str, AppError> {
    let patch = HotspotUserPatch::from(&account);
    state.router.update_user(&account.username, &patch).await?;

    info!(user = %account.username, "hotspot account updated");
    Ok("Chỉnh sửa thành viên thành công")
}
