use axum::http::StatusCode;
use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{ApiErrorKind, FetchDoctorsParams, NETWORK_ERROR_MESSAGE, NETWORK_ERROR_STATUS};

#[tokio::test]
async fn test_error_field_becomes_message() {
    let client = common::fixed_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"Database unavailable"}"#,
    )
    .await;
    let err = client.fetch_doctors(&FetchDoctorsParams::default()).await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Http);
    assert_eq!(err.status, 500);
    assert_eq!(err.message, "Database unavailable");
}

#[tokio::test]
async fn test_message_field_used_without_error_field() {
    let client =
        common::fixed_response(StatusCode::BAD_REQUEST, r#"{"message":"Invalid sortBy"}"#).await;
    let err = client.fetch_doctors(&FetchDoctorsParams::default()).await.unwrap_err();

    assert_eq!(err.status, 400);
    assert_eq!(err.message, "Invalid sortBy");
}

#[tokio::test]
async fn test_unreadable_error_body_falls_back_to_status() {
    let client = common::fixed_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").await;
    let err = client.fetch_doctors(&FetchDoctorsParams::default()).await.unwrap_err();

    assert_eq!(err.status, 502);
    assert_eq!(err.message, "HTTP 502");
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let client = common::fixed_response(StatusCode::OK, r#"{"doctors":"nope"}"#).await;
    let err = client.fetch_doctors(&FetchDoctorsParams::default()).await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Decode);
    assert_eq!(err.status, 200);
    assert!(err.message.starts_with("Invalid response from server"));
}

#[tokio::test]
async fn test_out_of_range_rating_fails_validation() {
    let body = r#"{
        "doctors": [{
            "id": "1",
            "name": "Dr. Bad Data",
            "email": "bad@example.com",
            "phone": "0",
            "is_status": "pending",
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
            "doctor_profile": {
                "specialisation": "Dermatology",
                "rating": 7.5,
                "rating_count": 1,
                "is_listed": true
            }
        }],
        "pagination": { "page": 1, "limit": 10, "total": 1, "totalPages": 1 }
    }"#;
    let client = common::fixed_response(StatusCode::OK, body).await;
    let err = client.fetch_doctors(&FetchDoctorsParams::default()).await.unwrap_err();

    assert_eq!(err.kind, ApiErrorKind::Decode);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = common::client_for(&format!("http://{addr}"));
    let err = client.fetch_doctors(&FetchDoctorsParams::default()).await.unwrap_err();

    assert!(err.is_network());
    assert_eq!(err.status, NETWORK_ERROR_STATUS);
    assert_eq!(err.message, NETWORK_ERROR_MESSAGE);
}
