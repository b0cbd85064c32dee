use crate::common;
use pretty_assertions::assert_eq;
use shared_types::{FetchDoctorsParams, FetchState, ParamChange, SortBy, SortOrder};

#[tokio::test]
async fn test_list_doctors_decodes_page() {
    let (client, _state) = common::mock_api().await;
    let resp = client
        .fetch_doctors(&FetchDoctorsParams::dashboard_defaults(10))
        .await
        .unwrap();

    assert_eq!(resp.doctors.len(), 2);
    assert_eq!(resp.doctors[0].name, "Dr. John Doe");
    assert_eq!(resp.doctors[0].doctor_profile.specialisation, "Cardiology");
    assert_eq!(resp.doctors[0].doctor_profile.filled_stars(), 4);
    assert_eq!(
        resp.doctors[0].doctor_profile.working_hours_display(),
        "monday: 9-5, friday: 9-1"
    );
    assert_eq!(resp.pagination.total, 25);
    assert_eq!(resp.pagination.total_pages, 3);
}

#[tokio::test]
async fn test_list_doctors_accepts_null_avatar() {
    let (client, _state) = common::mock_api().await;
    let resp = client
        .fetch_doctors(&FetchDoctorsParams::dashboard_defaults(10))
        .await
        .unwrap();

    assert_eq!(
        resp.doctors[0].profile_picture.as_deref(),
        Some("https://example.com/avatar.jpg")
    );
    assert_eq!(resp.doctors[1].name, "Dr. Jane Roe");
    assert_eq!(resp.doctors[1].profile_picture, None);
}

#[tokio::test]
async fn test_list_doctors_sends_defined_params_only() {
    let (client, state) = common::mock_api().await;
    client
        .fetch_doctors(&FetchDoctorsParams::dashboard_defaults(10))
        .await
        .unwrap();

    let seen = state.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path, "/v1/doctors");
    assert_eq!(
        seen[0].query.as_deref(),
        Some("page=1&limit=10&sortBy=rating&sortOrder=desc")
    );
    assert_eq!(seen[0].authorization, None);
}

#[tokio::test]
async fn test_list_doctors_encodes_filters() {
    let (client, state) = common::mock_api().await;
    let params = FetchDoctorsParams::dashboard_defaults(10).merged([
        ParamChange::Search(Some("john doe".to_string())),
        ParamChange::MinRating(Some(4.5)),
        ParamChange::IsListed(Some(false)),
        ParamChange::SortBy(Some(SortBy::RatingCount)),
        ParamChange::SortOrder(Some(SortOrder::Asc)),
    ]);
    client.fetch_doctors(&params).await.unwrap();

    let query = state.requests()[0].query.clone().unwrap();
    assert!(query.contains("search=john%20doe"));
    assert!(query.contains("minRating=4.5"));
    assert!(query.contains("isListed=false"));
    assert!(query.contains("sortBy=rating_count"));
    assert!(query.contains("sortOrder=asc"));
    assert!(!query.contains("language"));
}

#[tokio::test]
async fn test_list_doctors_echoes_page_and_limit() {
    let (client, _state) = common::mock_api().await;
    let params = FetchDoctorsParams::dashboard_defaults(5).merged([ParamChange::Page(2)]);
    let resp = client.fetch_doctors(&params).await.unwrap();

    assert_eq!(resp.pagination.page, 2);
    assert_eq!(resp.pagination.limit, 5);
}

#[tokio::test]
async fn test_list_doctors_sends_bearer_token() {
    let state = common::MockState::default();
    let base_url = common::serve(common::doctors_api(state.clone())).await;
    let client = common::client_for(&base_url).with_token("secret-token");

    client
        .fetch_doctors(&FetchDoctorsParams::default())
        .await
        .unwrap();

    let seen = state.requests();
    assert_eq!(seen[0].query, None);
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer secret-token"));
}

#[tokio::test]
async fn test_latest_response_wins_over_stale_one() {
    let (client, _state) = common::mock_api().await;
    let mut state = FetchState::pending();

    let first = state.begin();
    let second = state.begin();

    let newer = client
        .fetch_doctors(&FetchDoctorsParams::default().merged([ParamChange::Page(2)]))
        .await;
    assert!(state.finish(second, newer));

    let older = client
        .fetch_doctors(&FetchDoctorsParams::default().merged([ParamChange::Page(1)]))
        .await;
    assert!(!state.finish(first, older));

    assert_eq!(state.pagination.map(|p| p.page), Some(2));
    assert!(!state.loading);
}
