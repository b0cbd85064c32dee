use crate::common;
use chrono::Datelike;
use pretty_assertions::assert_eq;
use shared_types::DoctorStatus;

#[tokio::test]
async fn test_get_doctor_by_id() {
    let (client, state) = common::mock_api().await;
    let doctor = client.fetch_doctor_by_id("1").await.unwrap();

    assert_eq!(doctor.id, "1");
    assert_eq!(doctor.name, "Dr. John Doe");
    assert_eq!(doctor.is_status, DoctorStatus::Active);
    assert_eq!(doctor.updated_at.month(), 6);
    assert_eq!(doctor.doctor_profile.languages(), ["English", "French"]);
    assert_eq!(state.requests()[0].path, "/v1/doctors/1");
}

#[tokio::test]
async fn test_get_doctor_not_found() {
    let (client, _state) = common::mock_api().await;
    let err = client.fetch_doctor_by_id("missing").await.unwrap_err();

    assert_eq!(err.status, 404);
    assert_eq!(err.message, "Doctor not found");
    assert!(!err.is_network());
}
