#![allow(clippy::unwrap_used)]
// Integration tests for `MembershipClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use clubwifi_api::membership::models::NewMemberRow;
use clubwifi_api::{Error, MembershipClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, MembershipClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = MembershipClient::with_client(reqwest::Client::new(), base_url, None);
    (server, client)
}

// ── Attendance ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_attendance_unwraps_data_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/CLB_DiemDanh_Select_byDate"))
        .and(body_json(json!({ "Date": "2023-03-17" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "MSSV": "123456",
                "HoTen": "Nguyen Van An",
                "ThoiGian": "2023-03-17T18:25:00",
                "ThoiGianDiemDanh": "18:25:00",
                "GhiChu": "thẻ sinh viên"
            }]
        })))
        .mount(&server)
        .await;

    let rows = client.attendance_by_date("2023-03-17").await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].student_id, "123456");
    assert_eq!(rows[0].checkin_time, "18:25:00");
    // Unmodeled upstream fields pass through.
    assert_eq!(
        rows[0].extra.get("GhiChu").and_then(|v| v.as_str()),
        Some("thẻ sinh viên")
    );
}

#[tokio::test]
async fn test_capitalized_data_key_accepted() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/CLB_ThanhVien_SelectAll"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Data": [{ "MSSV": "123456", "HoTen": "Nguyen Van An" }]
        })))
        .mount(&server)
        .await;

    let members = client.list_members().await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].full_name, "Nguyen Van An");
}

#[tokio::test]
async fn test_missing_data_key_is_its_own_error() {
    let (server, client) = setup().await;

    // A rejected token makes the upstream answer without the envelope key.
    Mock::given(method("POST"))
        .and(path("/CLB_DiemDanh_Select_byDate"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "err": "token expired" })),
        )
        .mount(&server)
        .await;

    let result = client.attendance_by_date("2023-03-17").await;

    match result {
        Err(ref err @ Error::MissingData { .. }) => {
            // The display text is what gets classified downstream.
            assert!(err.to_string().contains("'Data'"));
        }
        other => panic!("expected MissingData, got: {other:?}"),
    }
}

// ── Members ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_member_by_id_takes_first_row() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/CLB_ThanhVien_Select_byMSSV"))
        .and(body_json(json!({ "MSSV": "123456" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "MSSV": "123456", "HoTen": "Nguyen Van An", "Lop": "21CT111" }]
        })))
        .mount(&server)
        .await;

    let member = client.member_by_id("123456").await.unwrap();
    assert_eq!(member.student_id, "123456");
}

#[tokio::test]
async fn test_member_by_id_empty_result() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/CLB_ThanhVien_Select_byMSSV"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let result = client.member_by_id("999999").await;
    assert!(matches!(result, Err(Error::MemberNotFound { .. })));
}

#[tokio::test]
async fn test_insert_member_omits_absent_fields() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/CLB_ThanhVien_Insert"))
        .and(body_json(json!({
            "MSSV": "123456",
            "HoTen": "Nguyen Van An",
            "Lop": "21CT111"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let member = NewMemberRow {
        student_id: "123456".into(),
        full_name: "Nguyen Van An".into(),
        birth_date: None,
        class_name: Some("21CT111".into()),
        email: None,
        phone: None,
    };
    client.insert_member(&member).await.unwrap();
}

#[tokio::test]
async fn test_http_error_status_surfaced() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/CLB_ThanhVien_Delete"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let result = client.delete_member("123456").await;

    match result {
        Err(Error::Membership { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Membership error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_token_sent_as_authorization_header() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let token: secrecy::SecretString = "Bearer abc123".to_string().into();
    let client = MembershipClient::with_client(reqwest::Client::new(), base_url, Some(token));

    Mock::given(method("POST"))
        .and(path("/CLB_ThanhVien_SelectAll"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    client.list_members().await.unwrap();
}
