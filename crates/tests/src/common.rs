use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, RawQuery, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use client::DoctorsClient;
use serde_json::{json, Value};
use shared_types::ApiConfig;

/// One request as seen by the mock API.
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
}

/// Shared log of requests received by a mock server.
#[derive(Clone, Default)]
pub struct MockState {
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockState {
    fn record(&self, path: &str, query: Option<String>, headers: &HeaderMap) {
        let authorization = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.seen.lock().unwrap().push(SeenRequest {
            path: path.to_string(),
            query,
            authorization,
        });
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

/// A doctor record in the shape the real API returns.
pub fn doctor_json(id: &str, name: &str, rating: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{id}@example.com"),
        "phone": "+1234567890",
        "profile_picture": "https://example.com/avatar.jpg",
        "is_status": "active",
        "created_at": "2023-01-01T00:00:00.000Z",
        "updated_at": "2023-06-15T12:30:00.000Z",
        "doctor_profile": {
            "specialisation": "Cardiology",
            "rating": rating,
            "rating_count": 10,
            "address": "123 Main St",
            "bio": "Experienced cardiologist",
            "working_hours": { "monday": "9-5", "friday": "9-1" },
            "is_listed": true,
            "supported_languages": ["English", "French"]
        }
    })
}

fn query_value(query: &Option<String>, key: &str) -> Option<u32> {
    query.as_deref()?.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k == key {
            v.parse().ok()
        } else {
            None
        }
    })
}

async fn list_doctors(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Json<Value> {
    state.record("/v1/doctors", query.clone(), &headers);

    let page = query_value(&query, "page").unwrap_or(1);
    let limit = query_value(&query, "limit").unwrap_or(10);
    let mut without_avatar = doctor_json("2", "Dr. Jane Roe", 3.0);
    without_avatar["profile_picture"] = Value::Null;
    Json(json!({
        "doctors": [
            doctor_json("1", "Dr. John Doe", 4.5),
            without_avatar,
        ],
        "pagination": {
            "page": page,
            "limit": limit,
            "total": 25,
            "totalPages": 3
        }
    }))
}

async fn get_doctor(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    state.record(&format!("/v1/doctors/{id}"), None, &headers);

    if id == "1" {
        (StatusCode::OK, Json(json!({ "doctor": doctor_json("1", "Dr. John Doe", 4.5) })))
    } else {
        (StatusCode::NOT_FOUND, Json(json!({ "error": "Doctor not found" })))
    }
}

/// Router that behaves like the doctors directory API.
pub fn doctors_api(state: MockState) -> Router {
    Router::new()
        .route("/v1/doctors", get(list_doctors))
        .route("/v1/doctors/{id}", get(get_doctor))
        .with_state(state)
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub fn client_for(base_url: &str) -> DoctorsClient {
    DoctorsClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        token: None,
    })
}

/// Mock doctors API plus a client pointed at it.
pub async fn mock_api() -> (DoctorsClient, MockState) {
    let state = MockState::default();
    let base_url = serve(doctors_api(state.clone())).await;
    (client_for(&base_url), state)
}

/// Serve a single `GET /v1/doctors` route that always answers with `status` and `body`.
pub async fn fixed_response(status: StatusCode, body: &'static str) -> DoctorsClient {
    let router = Router::new().route(
        "/v1/doctors",
        get(move || async move { (status, [("content-type", "application/json")], body) }),
    );
    client_for(&serve(router).await)
}
