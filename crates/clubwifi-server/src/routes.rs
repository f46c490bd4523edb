use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use crate::cors;
use crate::handlers::{attendance, hotspot, members, system};
use crate::state::AppState;

/// Build the full route table.
///
/// Route names are the portal frontend's contract and stay as-is; the
/// CORS middleware wraps everything, preflights and error responses
/// included.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::homepage))
        .route("/ip", get(system::server_ip))
        // ── Hotspot / router accounts ──
        .route("/login", post(hotspot::login))
        .route("/lay-danh-sach-user", get(hotspot::account_list))
        .route("/tao-user", post(hotspot::create_account))
        .route("/xoa-tai-khoan", post(hotspot::remove_account))
        .route("/lay-user-id", post(hotspot::account_id))
        .route("/doi-mat-khau", post(hotspot::change_password))
        .route("/chinh-sua-thanh-vien", post(hotspot::edit_account))
        // ── Attendance ──
        .route("/lay-danh-sach-dang-nhap/{date}", get(attendance::by_date_path))
        .route("/lay-danh-sach-dang-nhap", post(attendance::by_date_body))
        // ── Members ──
        .route("/lay-so-luong-thanh-vien", get(members::member_count))
        .route("/lay-danh-sach-thanh-vien", get(members::member_list))
        .route("/lay-thong-tin-thanh-vien", post(members::member_info))
        .route("/them-thanh-vien", post(members::add_member))
        .route("/xoa-thanh-vien", post(members::remove_member))
        .layer(middleware::from_fn(cors::permissive_cors))
        .with_state(state)
}
